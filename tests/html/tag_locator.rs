//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use vmail_parser::parsers::html::{TagLocator, TagSpan};

    #[test]
    fn quoted_greater_than() {
        let source = "<a title=\"1 > 0\" href=x>y</a><b>";
        let mut locator = TagLocator::new(source);

        assert_eq!(locator.find_start_tag("a"), Some(TagSpan { start: 0, end: 24 }));
        assert_eq!(locator.find_start_tag("b").map(|span| span.start), Some(29));
    }

    #[test]
    fn prefix_of_longer_name() {
        let source = "<table><tbody><tr><td>";
        let mut locator = TagLocator::new(source);

        assert_eq!(locator.find_start_tag("tbody").map(|span| span.start), Some(7));
        assert_eq!(locator.find_start_tag("td").map(|span| span.start), Some(18));
    }

    #[test]
    fn uppercase_source() {
        let mut locator = TagLocator::new("<DIV CLASS=a>");
        assert_eq!(locator.find_start_tag("div").map(|span| span.start), Some(0));
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
    use vmail_parser::parsers::html::TagLocator;

    #[test]
    fn missing_tag_keeps_cursor() {
        let mut locator = TagLocator::new("<p>one</p><span>");

        assert_eq!(locator.find_start_tag("div"), None);
        assert_eq!(locator.find_start_tag("p").map(|span| span.start), Some(0));
    }
}
