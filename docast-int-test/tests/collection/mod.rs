mod accessor_test;
mod codec_test;
mod flatten_test;
