pub(crate) mod test_utils;
mod thread_safety_tests;
mod value_tests;
