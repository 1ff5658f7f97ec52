use fpds_watch_core::markup::LABEL_MARKER_TAG;

/// Function declaration evaluated with a result row table as `this`.
///
/// Finds the first cell holding a label marker whose text contains `label` and
/// returns the rendered text of the next `td` sibling after it, or `null`.
pub(crate) fn labeled_value_fn(label: &str) -> String {
    let label_json = serde_json::Value::String(label.to_string()).to_string();
    format!(
        r"function () {{
    const label = {label_json};
    for (const td of this.querySelectorAll('td')) {{
        const marked = Array.from(td.querySelectorAll('{LABEL_MARKER_TAG}'))
            .some((m) => (m.textContent || '').includes(label));
        if (!marked) continue;
        let next = td.nextElementSibling;
        while (next && next.tagName !== 'TD') next = next.nextElementSibling;
        return next ? next.innerText : null;
    }}
    return null;
}}"
    )
}

/// Function declaration returning the current `value` of a form field.
pub(crate) const FIELD_VALUE_FN: &str = "function () { return this.value; }";
