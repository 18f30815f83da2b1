mod parse_srcset;
mod tag_locator;
