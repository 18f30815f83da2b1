//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use vmail_parser::parsers::css::classify_selector_list;
    use vmail_parser::SelectorType::{self, *};

    fn types(selector: &str) -> Vec<SelectorType> {
        classify_selector_list(selector).types.into_iter().collect()
    }

    #[test]
    fn single_kinds() {
        assert_eq!(types("button"), vec![TypeSelector]);
        assert_eq!(types("*"), vec![UniversalSelectorStar]);
        assert_eq!(types(".button"), vec![ClassSelector]);
        assert_eq!(types("#someID"), vec![IdSelector]);
        assert_eq!(types("[hidden]"), vec![AttributeSelector]);
    }

    #[test]
    fn combinators() {
        assert_eq!(types(".cover .img"), vec![ClassSelector, DescendantCombinator]);
        assert_eq!(types(".cover > .img"), vec![ChildCombinator, ClassSelector]);
        assert_eq!(types(".cover ~ .img"), vec![ClassSelector, GeneralSiblingCombinator]);
        assert_eq!(types("h1 + p"), vec![AdjacentSiblingCombinator]);
        assert_eq!(types("h1+p"), vec![AdjacentSiblingCombinator]);
    }

    #[test]
    fn type_inside_descendant_chain() {
        assert_eq!(
            types(".cover img"),
            vec![ClassSelector, DescendantCombinator, TypeSelector]
        );
        assert!(!types("ul > li").contains(&TypeSelector));
    }

    #[test]
    fn chaining_is_classes_only() {
        assert_eq!(types(".grid.flatten"), vec![ChainingSelectors, ClassSelector]);
        assert_eq!(
            types(".button[disabled=\"disabled\"]"),
            vec![AttributeSelector, ClassSelector]
        );
        assert!(!types("a.external").contains(&ChainingSelectors));
    }

    #[test]
    fn grouping() {
        assert_eq!(types(".grid, .notgrid"), vec![ClassSelector, GroupingSelectors]);
        assert_eq!(
            types("a[title=\"x, y\"]"),
            vec![AttributeSelector]
        );
    }

    #[test]
    fn pseudo_selectors_are_stripped() {
        let features = classify_selector_list("a:hover, li:nth-child(2n+1)::before");

        assert_eq!(features.pseudo_selectors, vec!["hover", "nth-child", "before"]);
        assert!(features.types.contains(&TypeSelector));
        assert!(features.types.contains(&GroupingSelectors));
        assert!(!features.types.contains(&AdjacentSiblingCombinator));
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
    use vmail_parser::parsers::css::classify_selector_list;

    #[test]
    fn empty_selector() {
        let features = classify_selector_list("   ");

        assert!(features.types.is_empty());
        assert!(features.pseudo_selectors.is_empty());
    }

    #[test]
    fn stray_combinator() {
        let features = classify_selector_list("> ");

        assert!(features.types.is_empty());
    }
}
