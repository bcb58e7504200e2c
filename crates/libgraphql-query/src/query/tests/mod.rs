mod query_template_tests;
