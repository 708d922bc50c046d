//! Prints the predefined-color reference table as HTML
//!
//! Emits the same table the documentation renders on its color-list
//! page: one row per palette entry with the name, the constant
//! identifier, the RGB triple, the HTML code and a color swatch.
//!
//! ```bash
//! cargo run --example color_table > colors.html
//! ```

use physiscript_color::{constant_ident, ColorRegistry};

fn main() {
    let registry = ColorRegistry::new();

    println!("<table>");
    println!("  <tr><th>Name</th><th>Constant</th><th>RGB</th><th>HTML code</th><th>Color</th></tr>");
    for (name, color) in registry.iter() {
        let html = color.html(false);
        let (r, g, b) = color.rgb();
        println!(
            "  <tr><td>{name}</td><td>{}</td><td>({r}, {g}, {b})</td><td>{html}</td>\
             <td style=\"background-color: {html};\"></td></tr>",
            constant_ident(name),
        );
    }
    println!("</table>");
}
