mod lookup_tests;
mod selection_tests;
