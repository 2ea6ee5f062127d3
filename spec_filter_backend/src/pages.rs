//! Inline HTML for the two pages this service serves.

use moto_core::record::SpecColumn;

/// `GET /` input form. Field names match the dataset schema's form fields.
pub fn form_page() -> String {
    let mut inputs = String::new();
    for col in SpecColumn::ALL {
        let field = col.form_field();
        inputs.push_str(&format!(
            "    <label>{field} <input type=\"text\" name=\"{field}\"></label><br>\n"
        ));
    }
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Motorcycle Finder</title></head>\n<body>\n\
         <h1>Find motorcycles by specification</h1>\n\
         <form action=\"/recommend\" method=\"post\">\n{inputs}\
         \x20   <label>Category <input type=\"text\" name=\"Category\"></label><br>\n\
         \x20   <button type=\"submit\">Recommend</button>\n</form>\n</body>\n</html>\n"
    )
}

/// `POST /recommend` result page: the matching `"Brand Model"` strings.
/// An empty list renders as an empty page body, not an error.
pub fn results_page(names: &[String]) -> String {
    let mut items = String::new();
    for name in names {
        items.push_str(&format!("    <li>{}</li>\n", escape(name)));
    }
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Recommendations</title></head>\n<body>\n\
         <h1>Recommended motorcycles</h1>\n<ul>\n{items}</ul>\n\
         <a href=\"/\">Back</a>\n</body>\n</html>\n"
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
