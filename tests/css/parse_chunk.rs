//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use vmail_parser::parsers::css::{parse_chunk, CssChunk, CssHandler};

    #[derive(Default)]
    struct Collected {
        events: Vec<String>,
    }

    impl CssHandler for Collected {
        fn selector(&mut self, selector_list: &str, line: usize) {
            self.events.push(format!("{line} selector {selector_list}"));
        }

        fn declaration(&mut self, property: &str, value: &str, line: usize) {
            self.events.push(format!("{line} {property}: {value}"));
        }

        fn at_rule(&mut self, keyword: &str, line: usize) {
            self.events.push(format!("{line} {keyword}"));
        }

        fn url(&mut self, url: &str, line: usize) {
            self.events.push(format!("{line} url {url}"));
        }
    }

    #[test]
    fn style_sheet_lines_are_offset_by_base_line() {
        let css = "\n  .a,\n  .b {\n    width: 1px;\n  }\n";
        let mut collected = Collected::default();
        parse_chunk(&CssChunk::style_sheet(css, 10), &mut collected);

        assert_eq!(
            collected.events,
            vec!["11 selector .a,\n  .b", "13 width: 1px"]
        );
    }

    #[test]
    fn inline_chunk_is_a_single_line() {
        let css = "color: red;\n  background:\n url(a.png)";
        let mut collected = Collected::default();
        parse_chunk(&CssChunk::inline(css, 7), &mut collected);

        assert_eq!(
            collected.events,
            vec!["7 color: red", "7 background: url(a.png)", "7 url a.png"]
        );
    }

    #[test]
    fn font_face_and_keyframes() {
        let css = "@font-face {\n  src: url(\"f.woff2\") format(\"woff2\");\n}\n@-webkit-keyframes spin {\n  from { opacity: 0 }\n}";
        let mut collected = Collected::default();
        parse_chunk(&CssChunk::style_sheet(css, 1), &mut collected);

        assert_eq!(
            collected.events,
            vec![
                "1 @font-face",
                "2 src: url(\"f.woff2\") format(\"woff2\")",
                "2 url f.woff2",
                "4 @-webkit-keyframes",
                "5 opacity: 0",
            ]
        );
    }

    #[test]
    fn image_set_urls() {
        let css = ".hero { background-image: image-set(\"a.avif\" 1x, url(b.jpg) 2x) }";
        let mut collected = Collected::default();
        parse_chunk(&CssChunk::style_sheet(css, 1), &mut collected);

        assert!(collected.events.contains(&"1 url a.avif".to_string()));
        assert!(collected.events.contains(&"1 url b.jpg".to_string()));
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
    use vmail_parser::parsers::css::{parse_chunk, CssChunk, CssHandler};

    #[derive(Default)]
    struct Properties(Vec<String>);

    impl CssHandler for Properties {
        fn selector(&mut self, _selector_list: &str, _line: usize) {}

        fn declaration(&mut self, property: &str, _value: &str, _line: usize) {
            self.0.push(property.to_string());
        }

        fn at_rule(&mut self, _keyword: &str, _line: usize) {}

        fn url(&mut self, _url: &str, _line: usize) {}
    }

    #[test]
    fn vendor_hacks() {
        let css = "*zoom: 1; .a { _height: 1px; *display: inline; color: red }";
        let mut properties = Properties::default();
        parse_chunk(&CssChunk::style_sheet(css, 1), &mut properties);

        assert!(properties.0.contains(&"_height".to_string()));
        assert!(properties.0.contains(&"color".to_string()));
    }

    #[test]
    fn garbage_only() {
        let mut properties = Properties::default();
        parse_chunk(&CssChunk::style_sheet("}}}{;;:", 1), &mut properties);

        assert!(properties.0.is_empty());
    }
}
