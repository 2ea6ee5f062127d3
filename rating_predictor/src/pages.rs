//! Inline HTML for the predictor's form and result pages.

use moto_core::record::SpecColumn;
use moto_core::RatedPick;

/// `GET /` input form, same fields as the spec-filter service.
pub fn form_page() -> String {
    let mut inputs = String::new();
    for col in SpecColumn::ALL {
        let field = col.form_field();
        inputs.push_str(&format!(
            "    <label>{field} <input type=\"text\" name=\"{field}\"></label><br>\n"
        ));
    }
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Motorcycle Rating Predictor</title></head>\n<body>\n\
         <h1>Predict a rating, find its neighbors</h1>\n\
         <form action=\"/recommend\" method=\"post\">\n{inputs}\
         \x20   <label>Category <input type=\"text\" name=\"Category\"></label><br>\n\
         \x20   <button type=\"submit\">Recommend</button>\n</form>\n</body>\n</html>\n"
    )
}

/// `POST /recommend` result page: the predicted rating and up to ten rows
/// whose recorded rating is closest to it.
pub fn results_page(predicted: f64, picks: &[RatedPick]) -> String {
    let mut items = String::new();
    for pick in picks {
        items.push_str(&format!(
            "    <li>{} {} &mdash; rating {:.2}</li>\n",
            escape(&pick.brand),
            escape(&pick.model),
            pick.rating
        ));
    }
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Recommendations</title></head>\n<body>\n\
         <h1>Predicted rating: {predicted:.2}</h1>\n\
         <h2>Motorcycles with similar ratings</h2>\n<ul>\n{items}</ul>\n\
         <a href=\"/\">Back</a>\n</body>\n</html>\n"
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
