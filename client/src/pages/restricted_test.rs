use super::*;
use crate::test_support::render_html;

#[test]
fn restricted_page_renders_message_without_links() {
    let html = render_html(|| view! { <RestrictedPage/> });
    assert!(html.contains("Restricted"), "{html}");
    assert!(!html.contains("<a"), "{html}");
}
