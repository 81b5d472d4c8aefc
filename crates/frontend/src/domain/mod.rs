pub mod a001_rule_library;
pub mod a002_function_library;
pub mod a003_rule_helper;
