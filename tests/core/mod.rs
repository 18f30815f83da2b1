mod report_options;
