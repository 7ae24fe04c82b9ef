mod move_ordering_tests;
mod search_tests;
