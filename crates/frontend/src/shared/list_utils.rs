//! Search helpers for lists: match highlighting and a debounced search box
use crate::shared::debounce::DebouncedCallback;
use leptos::prelude::*;

/// Byte ranges of case-insensitive occurrences of `filter` in `text`.
///
/// Empty when the filter is blank or when lowercasing changes byte offsets
/// (the ranges would not line up with `text`).
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    if filter.trim().is_empty() {
        return Vec::new();
    }

    let text_lower = text.to_lowercase();
    let filter_lower = filter.to_lowercase();
    if text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Highlight matches in text (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box that reports its value after a quiet period, with a clear button
#[component]
pub fn SearchInput(
    /// Receives the value once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    /// Quiet period in milliseconds
    debounce_ms: u32,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search anything...".to_string()
    } else {
        placeholder
    };

    // Local state for the input (before debounce)
    let (input_value, set_input_value) = signal(String::new());
    let debounced = DebouncedCallback::new(debounce_ms, on_change);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        debounced.call(new_value);
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        debounced.call(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-input__clear" on:click=clear_filter title="Clear">
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Cloud Accounts", "cloud"), vec![(0, 5)]);
        assert_eq!(match_ranges("abcabc", "BC"), vec![(1, 3), (4, 6)]);
    }

    #[test]
    fn test_match_ranges_blank_filter() {
        assert!(match_ranges("Cloud", "  ").is_empty());
        assert!(match_ranges("Cloud", "zzz").is_empty());
    }
}
