//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use assert_cmd::Command;

    fn fixture(name: &str) -> String {
        format!("{}/tests/_data_/{}", env!("CARGO_MANIFEST_DIR"), name)
    }

    #[test]
    fn print_help_information() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg("-h")
            .output()
            .unwrap();

        assert!(out.status.success());
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains("VMAIL_VALUE_SENSITIVE_PROPERTIES"));
    }

    #[test]
    fn print_version() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg("-V")
            .output()
            .unwrap();

        assert_eq!(
            String::from_utf8_lossy(&out.stdout),
            format!("{} {}\n", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
        );
        assert!(out.status.success());
    }

    #[test]
    fn report_from_stdin() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg("--compact")
            .arg("-")
            .write_stdin("<html><body>\n<div style=\"background: red\"></div>\n</body></html>")
            .output()
            .unwrap();

        assert!(out.status.success());
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains(r#""CssProperties":{"background":{"":[2]}}"#));
        assert!(stdout.contains(r#""div":{"":[2]}"#));
    }

    #[test]
    fn report_from_file() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg("-c")
            .arg(fixture("newsletter.html"))
            .output()
            .unwrap();

        assert!(out.status.success());
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains(r#""@media":{"":[14]}"#));
        assert!(stdout.contains(r#""display":{"none":[16]}"#));
        assert!(stdout.contains(r#""ImgFormats":{"gif":[21],"png":[23]}"#));
    }

    #[test]
    fn value_property_flag() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .args(["--compact", "-p", "Float"])
            .write_stdin("<p style=\"float: LEFT\"></p>")
            .output()
            .unwrap();

        assert!(out.status.success());
        assert!(String::from_utf8_lossy(&out.stdout).contains(r#""float":{"left":[1]}"#));
    }

    #[test]
    fn pretty_output_by_default() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .write_stdin("<p></p>")
            .output()
            .unwrap();

        assert!(out.status.success());
        assert!(String::from_utf8_lossy(&out.stdout).starts_with("{\n  \"HtmlTags\""));
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use assert_cmd::Command;

    #[test]
    fn missing_file() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg("no/such/file.html")
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(1));
        assert!(out.stdout.is_empty());
        assert!(String::from_utf8_lossy(&out.stderr).contains("Could not read no/such/file.html"));
    }

    #[test]
    fn binary_input() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .write_stdin(vec![0x47u8, 0x49, 0x46, 0x00, 0x01])
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&out.stderr).contains("NUL byte at offset 3"));
    }

    #[test]
    fn invalid_environment() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .env("VMAIL_ENCODING", "not-a-charset")
            .write_stdin("<p></p>")
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&out.stderr).contains("VMAIL_ENCODING"));
    }
}
