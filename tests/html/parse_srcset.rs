//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use vmail_parser::parsers::html::{parse_srcset, SrcSetItem};

    #[test]
    fn multiline_candidates() {
        let items = parse_srcset(
            "elva-fairy-320w.svg,\n             elva-fairy-480w.svg 1.5x,\n             elva-fairy-640w.svg 2x",
        );

        assert_eq!(
            items,
            vec![
                SrcSetItem { path: "elva-fairy-320w.svg", descriptor: "" },
                SrcSetItem { path: "elva-fairy-480w.svg", descriptor: "1.5x" },
                SrcSetItem { path: "elva-fairy-640w.svg", descriptor: "2x" },
            ]
        );
    }

    #[test]
    fn data_url_keeps_its_comma() {
        let items = parse_srcset("data:image/gif;base64,R0lGODlh 1x, b.png 2x");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].path, "data:image/gif;base64,R0lGODlh");
        assert_eq!(items[1].path, "b.png");
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
    use vmail_parser::parsers::html::parse_srcset;

    #[test]
    fn empty_and_commas_only() {
        assert!(parse_srcset("").is_empty());
        assert!(parse_srcset(" , ,, ").is_empty());
    }
}
