//! Format products as text for the terminal.

use crate::product::Product;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

fn format_average(product: &Product) -> String {
    product
        .average_rating()
        .map(|avg| format!("{:.1}", avg))
        .unwrap_or_else(|| "-".to_string())
}

/// One row per product: id, title, category, average rating, rating count.
pub fn format_product_table(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products.".to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Id", "Title", "Category", "Rating", "Votes"]);
    for product in products {
        table.add_row(vec![
            product.id.clone(),
            or_dash(product.title.as_deref()),
            or_dash(Some(product.product_type.display_name())),
            format_average(product),
            product.rating_count().to_string(),
        ]);
    }
    format!("{}\n\n{} product(s)", table, products.len())
}

/// Detail view of one product.
pub fn format_product_detail(product: &Product) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(product.title.as_deref().unwrap_or("(untitled)"))
    ));
    out.push_str(&format!("  Id: {}\n", product.id));
    out.push_str(&format!("  Category: {}\n", or_dash(Some(product.product_type.display_name()))));
    out.push_str(&format!("  Maker: {}\n", or_dash(product.maker.as_deref())));
    out.push_str(&format!("  Director: {}\n", or_dash(product.director.as_deref())));
    out.push_str(&format!("  Genre: {}\n", or_dash(product.genre.as_deref())));
    if let Some(cast) = product.cast.as_ref().filter(|c| !c.is_empty()) {
        out.push_str(&format!("  Cast: {}\n", cast.join(", ")));
    }
    out.push_str(&format!("  Description: {}\n", or_dash(product.description.as_deref())));
    out.push_str(&format!("  Image: {}\n", or_dash(product.image.as_deref())));
    out.push_str(&format!("  Url: {}\n", or_dash(product.url.as_deref())));
    out.push_str(&format!("  Trailer: {}\n", or_dash(product.trailer_url.as_deref())));
    out.push_str(&format!("  Video: {}\n", or_dash(product.youtube_id.as_deref())));
    out.push_str(&format!("  Quantity: {}\n", or_dash(product.quantity.as_deref())));
    out.push_str(&format!("  Price: {}\n", product.price));
    out.push_str(&format!(
        "  Rating: {} ({} vote(s))\n",
        format_average(product),
        product.rating_count()
    ));
    out.push_str(&format!("  Comments: {}", product.comments.len()));
    out
}
