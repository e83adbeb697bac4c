mod selection_set_equality_tests;
