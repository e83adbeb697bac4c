mod data_dict_tests;
mod memoization_tests;
