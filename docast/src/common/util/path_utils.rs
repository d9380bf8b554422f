use smallvec::SmallVec;

/// Path segments rarely exceed this depth, deeper paths spill to the heap.
pub(crate) type PathSegments<'a> = SmallVec<[&'a str; 8]>;

/// Splits a dotted path on `separator`. No escaping is applied, so an empty
/// path yields a single empty segment.
#[inline]
pub(crate) fn split_path(path: &str, separator: char) -> PathSegments<'_> {
    path.split(separator).collect()
}
