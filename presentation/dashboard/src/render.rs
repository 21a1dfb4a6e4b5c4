use crate::dashboard::{Dashboard, Mode};
use crate::notice::Notice;

/// Text rendering of the whole dashboard: notice, form, table and pager.
pub fn render(dashboard: &Dashboard) -> String {
    let mut lines: Vec<String> = Vec::new();

    match dashboard.notice() {
        Some(notice @ Notice::Success(_)) => lines.push(format!("[ok] {notice}")),
        Some(notice @ Notice::Error(_)) => lines.push(format!("[error] {notice}")),
        None => {}
    }

    lines.push(match dashboard.mode() {
        Mode::Idle => "Add product".to_string(),
        Mode::Editing(id) => format!("Edit product {id}"),
    });
    let draft = dashboard.draft();
    lines.push(format!(
        "  name={:?} description={:?} price={:?} stock={:?}",
        draft.name, draft.description, draft.price, draft.stock
    ));
    lines.push(String::new());

    lines.push(format!(
        "{:<3} {:>6}  {:<24} {:<32} {:>10} {:>7}",
        "sel", "id", "name", "description", "price", "stock"
    ));
    if dashboard.products().is_empty() {
        lines.push("  (no products)".to_string());
    }
    for product in dashboard.products() {
        let mark = if dashboard.selected().contains(&product.id) {
            "[x]"
        } else {
            "[ ]"
        };
        lines.push(format!(
            "{:<3} {:>6}  {:<24} {:<32} {:>10.2} {:>7}",
            mark,
            product.id,
            truncate(&product.name, 24),
            truncate(&product.description, 32),
            product.price,
            product.stock
        ));
    }

    let pagination = dashboard.pagination();
    lines.push(String::new());
    lines.push(format!(
        "Page {} of {} ({} products)",
        pagination.page,
        pagination.last_page(),
        pagination.total_count
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('~');
    cut
}
