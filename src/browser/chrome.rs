use crate::channel::{RefToken, RemoteChannel};
use crate::error::{BrowserError, Result};
use crate::finder::{BoundingBox, ScanProgram};
use async_trait::async_trait;
use headless_chrome::{Element, Tab};
use serde_json::Value;
use std::sync::Arc;

/// Interpreter for [`ScanProgram`] payloads, run inside the page
const SCAN_JS: &str = include_str!("scan.js");

const BOUNDING_BOX_JS: &str = r#"
    function() {
        var r = this.getBoundingClientRect();
        return JSON.stringify({ x: r.x, y: r.y, width: r.width, height: r.height });
    }
"#;

const CLEAR_JS: &str = r#"
    function() {
        this.value = '';
        this.dispatchEvent(new Event('input', { bubbles: true }));
    }
"#;

/// [`RemoteChannel`] backed by a Chrome tab over CDP.
///
/// headless_chrome is synchronous, so every call runs on the blocking pool.
#[derive(Clone)]
pub struct ChromeChannel {
    tab: Arc<Tab>,
}

impl ChromeChannel {
    pub fn new(tab: Arc<Tab>) -> Self {
        Self { tab }
    }

    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Expression evaluating `program` in the page
    pub fn scan_script(program: &ScanProgram) -> Result<String> {
        Ok(format!("({})({})", SCAN_JS.trim(), program.to_json()?))
    }

    async fn run<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Tab) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let tab = self.tab.clone();
        tokio::task::spawn_blocking(move || f(&tab))
            .await
            .map_err(|e| BrowserError::EvaluationFailed(format!("CDP call did not complete: {}", e)))?
    }

    async fn act<F>(&self, action: &'static str, token: &RefToken, f: F) -> Result<()>
    where
        F: FnOnce(&Element<'_>) -> Result<()> + Send + 'static,
    {
        let selector = token.selector();
        self.run(move |tab| {
            let element = tab.find_element(&selector).map_err(|e| BrowserError::action(action, e))?;
            f(&element)
        })
        .await
    }
}

/// XPath locators start with `/` or `(`; anything else is CSS
fn is_xpath(locator: &str) -> bool {
    locator.starts_with('/') || locator.starts_with('(')
}

fn locate<'a>(tab: &'a Tab, locator: &str) -> std::result::Result<Element<'a>, String> {
    let found = if is_xpath(locator) { tab.find_element_by_xpath(locator) } else { tab.find_element(locator) };
    found.map_err(|e| e.to_string())
}

fn parse_scan_result(value: Option<Value>) -> Result<Option<RefToken>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(id)) => Ok(Some(RefToken::new(id))),
        Some(other) => Err(BrowserError::EvaluationFailed(format!("Unexpected scan result: {}", other))),
    }
}

fn parse_bounding_box(value: Option<Value>) -> Result<BoundingBox> {
    let json = value
        .as_ref()
        .and_then(Value::as_str)
        .ok_or_else(|| BrowserError::EvaluationFailed("No bounding box returned".to_string()))?;

    serde_json::from_str(json)
        .map_err(|e| BrowserError::EvaluationFailed(format!("Failed to parse bounding box: {}", e)))
}

#[async_trait]
impl RemoteChannel for ChromeChannel {
    async fn bounding_box(&self, locator: &str) -> Result<BoundingBox> {
        let locator = locator.to_string();
        self.run(move |tab| {
            let element = locate(tab, &locator)
                .map_err(|reason| BrowserError::ReferenceNotFound { locator: locator.clone(), reason })?;
            let result = element
                .call_js_fn(BOUNDING_BOX_JS, vec![], false)
                .map_err(|e| BrowserError::EvaluationFailed(format!("Failed to read bounding box: {}", e)))?;
            parse_bounding_box(result.value)
        })
        .await
    }

    async fn evaluate(&self, program: &ScanProgram) -> Result<Option<RefToken>> {
        let script = Self::scan_script(program)?;
        log::debug!("submitting {} scan for {}", program.direction, program.tag);

        self.run(move |tab| {
            let result = tab.evaluate(&script, false).map_err(|e| BrowserError::EvaluationFailed(e.to_string()))?;
            parse_scan_result(result.value)
        })
        .await
    }

    async fn click(&self, token: &RefToken) -> Result<()> {
        self.act("click", token, |element| {
            element.click().map_err(|e| BrowserError::action("click", e))?;
            Ok(())
        })
        .await
    }

    async fn input(&self, token: &RefToken, value: &str) -> Result<()> {
        let value = value.to_string();
        self.act("input", token, move |element| {
            element.type_into(&value).map_err(|e| BrowserError::action("input", e))?;
            Ok(())
        })
        .await
    }

    async fn clear(&self, token: &RefToken) -> Result<()> {
        self.act("clear", token, |element| {
            element.call_js_fn(CLEAR_JS, vec![], false).map_err(|e| BrowserError::action("clear", e))?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::{Direction, Point};

    #[test]
    fn test_is_xpath() {
        assert!(is_xpath("//label[text()='Email']"));
        assert!(is_xpath("(//input)[2]"));
        assert!(!is_xpath("#email-label"));
        assert!(!is_xpath("label.name"));
    }

    #[test]
    fn test_parse_scan_result() {
        assert_eq!(parse_scan_result(None).unwrap(), None);
        assert_eq!(parse_scan_result(Some(Value::Null)).unwrap(), None);
        assert_eq!(parse_scan_result(Some(Value::from("3"))).unwrap(), Some(RefToken::new("3")));
        assert!(matches!(parse_scan_result(Some(Value::from(3))), Err(BrowserError::EvaluationFailed(_))));
    }

    #[test]
    fn test_parse_bounding_box() {
        let value = Value::from(r#"{"x":100,"y":200,"width":50,"height":30}"#);
        assert_eq!(parse_bounding_box(Some(value)).unwrap(), BoundingBox::new(100.0, 200.0, 50.0, 30.0));
        assert!(parse_bounding_box(None).is_err());
    }

    #[test]
    fn test_scan_script_embeds_program_as_data() {
        let program = ScanProgram::build(Point::new(125, 215), Direction::Right, "in'put").unwrap();
        let script = ChromeChannel::scan_script(&program).unwrap();

        assert!(script.starts_with("((function (program)"));
        assert!(script.ends_with(r#""golden_step":0.381966})"#));
        // the tag only appears inside the JSON string literal
        assert!(script.contains(r#""tag":"in'put""#));
        assert!(script.contains("elementFromPoint"));
        // page-set ref values are replaced with a fresh numeric id
        assert!(script.contains("/^[0-9]+$/.test(id || '')"));
    }
}
