mod car_tests;
mod token_tests;
