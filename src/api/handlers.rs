//! HTTP handlers for the Roman numeral API.
//!
//! Handlers stay thin: they decide which conversion mode a request asks
//! for, call the pure core, and translate its results and errors into
//! HTTP status codes and JSON bodies. They hold no state and perform no
//! I/O of their own; `async` is purely for composability with the axum
//! runtime.

use axum::{
    Json,
    extract::Query,
    response::{Html, IntoResponse, Response},
};

use super::dto::{ConversionResponse, RangeConversionsResponse, RomanNumeralQuery};
use super::error::ApiErrorResponse;
use crate::convert::{convert_arabic_to_roman, convert_arabic_to_roman_range};

// =============================================================================
// GET / Handler
// =============================================================================

/// The conversion form served at the root: one form per conversion mode,
/// both submitting to `GET /romannumeral`.
const INDEX_HTML: &str = r"
<body>
<form name=single action=/romannumeral method=get>
    <label for=query>Query</label>
    <input id=query name=query>
    <button type=submit>Submit</button>
</form>
<form name=range action=/romannumeral method=get>
    <label for=min>Min</label>
    <input id=min name=min>
    <label for=max>Max</label>
    <input id=max name=max>
    <button type=submit>Submit</button>
</form>
</body>
";

/// Serves the static conversion form.
pub async fn index_html() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// =============================================================================
// GET /romannumeral Handler
// =============================================================================

/// Help text returned when neither conversion mode is satisfied.
pub const MISSING_PARAMETERS_HELP: &str = r#"please specify a "query={integer}" parameter, or both "min={integer}" and "max={integer}" parameters for a range conversion"#;

/// Converts a single value or a range, depending on the query string.
///
/// A `query` parameter selects single-conversion mode and takes
/// precedence over any range parameters; otherwise `min` and `max`
/// together select range mode; otherwise the request is answered with
/// the help text. The single-conversion response echoes the input
/// exactly as received (`query=007` comes back as `"007"`), while range
/// records carry the canonical decimal rendering of each integer.
///
/// # Response
///
/// - **200 OK** single mode: `{"input": ..., "output": ...}`
/// - **200 OK** range mode: `{"conversions": [{"input": ..., "output": ...}, ...]}`
///
/// # Errors
///
/// Returns [`ApiErrorResponse`] (400 Bad Request, `{"error": ...}`) for
/// every conversion failure and for requests satisfying neither mode.
pub async fn roman_numeral(
    Query(parameters): Query<RomanNumeralQuery>,
) -> Result<Response, ApiErrorResponse> {
    if let Some(query) = parameters.query {
        let output = convert_arabic_to_roman(&query)?;
        let response = ConversionResponse {
            input: query,
            output,
        };
        Ok(Json(response).into_response())
    } else if let (Some(min), Some(max)) = (parameters.min, parameters.max) {
        let conversions = convert_arabic_to_roman_range(&min, &max)?;
        Ok(Json(RangeConversionsResponse::from(conversions)).into_response())
    } else {
        Err(ApiErrorResponse::bad_request(MISSING_PARAMETERS_HELP))
    }
}

// =============================================================================
// Tests
// =============================================================================
