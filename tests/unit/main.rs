mod test_catalog;
