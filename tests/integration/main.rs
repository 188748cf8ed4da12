mod helpers;
mod test_validation;
