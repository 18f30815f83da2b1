//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use std::env;

    use vmail_parser::{produce_report_with_options, ReportOptions};

    #[test]
    fn shorthand_roots_are_configurable() {
        let html = b"<p style=\"padding-left: 1px; border-top: 0; margin-top: 2px\"></p>";
        let options = ReportOptions {
            shorthand_roots: ["padding".to_string()].into_iter().collect(),
            ..ReportOptions::default()
        };
        let report = produce_report_with_options(html, &options).unwrap();

        assert!(report.css_properties().contains_key("padding"));
        assert!(report.css_properties().contains_key("border-top"));
        assert!(report.css_properties().contains_key("margin-top"));
    }

    #[test]
    fn forced_encoding() {
        let options = ReportOptions {
            encoding: Some("koi8-r".to_string()),
            ..ReportOptions::default()
        };
        let report = produce_report_with_options(b"<div style=\"display: \xC2\"></div>", &options).unwrap();

        assert!(report.css_properties().get("display", "б").is_some());
    }

    // The only test in this binary that touches the process environment
    #[test]
    fn from_env() {
        env::set_var("VMAIL_VALUE_SENSITIVE_PROPERTIES", "display, Float");
        env::set_var("VMAIL_SHORTHAND_ROOTS", "margin");
        env::set_var("VMAIL_ENCODING", "latin1");
        let options = ReportOptions::from_env();
        env::remove_var("VMAIL_VALUE_SENSITIVE_PROPERTIES");
        env::remove_var("VMAIL_SHORTHAND_ROOTS");
        env::remove_var("VMAIL_ENCODING");

        let options = options.unwrap();
        assert!(options.value_sensitive_properties.contains("float"));
        assert!(!options.shorthand_roots.contains("padding"));
        assert_eq!(options.encoding.as_deref(), Some("windows-1252"));

        env::set_var("VMAIL_ENCODING", "no-such-charset");
        let result = ReportOptions::from_env();
        env::remove_var("VMAIL_ENCODING");

        let error = result.unwrap_err();
        assert_eq!(error.variable, "VMAIL_ENCODING");
    }
}
