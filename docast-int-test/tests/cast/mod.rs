mod float_test;
mod integer_test;
mod text_test;
