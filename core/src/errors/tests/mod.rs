mod classifier_tests;
mod translator_tests;
