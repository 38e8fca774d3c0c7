use leptos::*;

use crate::components::toast::use_toaster;
use crate::i18n::{use_language, Language};

pub const EXPLANATION_FILENAME: &str = "mall-management-system-explanation.md";

/// Static description offered as a download. No version-control call is
/// made anywhere in this module; the "push" button only notifies.
pub const SYSTEM_EXPLANATION: &str = r#"# Indian Mall Management System Overview

## Core Architecture

The Indian Mall Management System is a browser-based administration console
for Indian shopping malls. It is organised into the following modules:

### 1. Dashboard Module
- At-a-glance analytics of mall performance
- KPI tracking for tenants, revenue, visitors and sales
- Reporting with Indian Rupee (₹) formatting

### 2. Admin Module
- Tenant management with Indian-specific data fields (GSTIN)
- Tenant status tracking across the leasing lifecycle

### 3. Sales Module
- Transaction records with the GST portion shown per bill
- Sales listings by store, payment method and date

### 4. Inventory Module
- Stock levels across mall stores
- Reorder thresholds and low-inventory flags

### 5. Purchase Module
- Purchase-order tracking per vendor
- Order status from placement to delivery

### 6. Payment Module
- Settlement records across Indian payment gateways
  (Razorpay, Paytm, PhonePe, UPI)
- Per-tenant payment status

### 7. Issue Management Module
- Ticketing for maintenance and customer complaints
- Priority and resolution tracking

## Localization

- Dual language support (English and Hindi)
- Currency formatting in Indian Rupee with lakh/crore digit grouping

## Access Control

- A single password gates the console; the session survives page reloads
- The gate is a preview mechanism only and is not suitable for production
  deployments without a server-verified credential flow

This console is a preview built on static sample data; connecting it to live
mall systems is an integration exercise left to each deployment.
"#;

struct Text {
    github_push: &'static str,
    explanation: &'static str,
    title: &'static str,
    description: &'static str,
    close: &'static str,
    download: &'static str,
    export_success: &'static str,
    export_detail: &'static str,
    push_title: &'static str,
    push_detail: &'static str,
}

const EN: Text = Text {
    github_push: "Push to GitHub",
    explanation: "Generate System Explanation",
    title: "System Explanation",
    description: "Here is a detailed explanation of how the Indian Mall Management System works.",
    close: "Close",
    download: "Download Explanation",
    export_success: "System explanation generated successfully!",
    export_detail: "You can now view or share the system explanation.",
    push_title: "GitHub Integration",
    push_detail: "This would push the code to GitHub in a real implementation.",
};

const HI: Text = Text {
    github_push: "GitHub पर पुश करें",
    explanation: "सिस्टम व्याख्या उत्पन्न करें",
    title: "सिस्टम व्याख्या",
    description: "यहां भारतीय मॉल प्रबंधन प्रणाली के काम करने का विस्तृत विवरण है।",
    close: "बंद करें",
    download: "व्याख्या डाउनलोड करें",
    export_success: "सिस्टम व्याख्या सफलतापूर्वक उत्पन्न की गई!",
    export_detail: "अब आप सिस्टम व्याख्या देख या साझा कर सकते हैं।",
    push_title: "GitHub एकीकरण",
    push_detail: "वास्तविक कार्यान्वयन में यह कोड को GitHub पर पुश करेगा।",
};

fn text(lang: Language) -> &'static Text {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
    }
}

#[component]
pub fn GithubExportButton() -> impl IntoView {
    let language = use_language();
    let toaster = use_toaster();
    let (show_explanation, set_show_explanation) = create_signal(false);

    let on_push = move |_| {
        let t = text(language.get_untracked());
        toaster.info(t.push_title, t.push_detail);
    };

    let on_download = move |_| {
        let t = text(language.get_untracked());
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(err) = save_text_file(EXPLANATION_FILENAME, SYSTEM_EXPLANATION) {
                leptos::logging::log!("explanation download failed: {err:?}");
                return;
            }
        }
        toaster.success(t.export_success, t.export_detail);
    };

    let panel_style = "
        margin-top: 1.5rem;
        padding: 1.5rem;
        background: var(--bg-subtle);
        border: 1px solid var(--border-subtle);
        border-radius: var(--radius-md);
    ";

    view! {
        <div>
            <div style="display: flex; flex-wrap: wrap; gap: 0.75rem;">
                <button
                    class="btn-primary"
                    style="background-color: #24292f;"
                    on:click=on_push
                >
                    {move || text(language.get()).github_push}
                </button>
                <button
                    class="btn-primary"
                    style="background-color: var(--brand-dark);"
                    on:click=move |_| set_show_explanation.update(|open| *open = !*open)
                >
                    {move || text(language.get()).explanation}
                </button>
            </div>

            <Show when=move || show_explanation.get()>
                <div style=panel_style>
                    <h3 style="margin: 0 0 0.25rem 0; color: var(--text-heading);">
                        {move || text(language.get()).title}
                    </h3>
                    <p style="margin: 0 0 1rem 0; color: var(--text-muted); font-size: 0.9rem;">
                        {move || text(language.get()).description}
                    </p>
                    <pre style="white-space: pre-wrap; font-size: 0.85rem; max-height: 320px; overflow-y: auto; background: var(--bg-surface); padding: 1rem; border-radius: var(--radius-md);">
                        {SYSTEM_EXPLANATION}
                    </pre>
                    <div style="display: flex; justify-content: space-between; margin-top: 1rem;">
                        <button
                            class="icon-button"
                            on:click=move |_| set_show_explanation.set(false)
                        >
                            {move || text(language.get()).close}
                        </button>
                        <button class="btn-primary" on:click=on_download>
                            {move || text(language.get()).download}
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn save_text_file(filename: &str, content: &str) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
    let blob = web_sys::Blob::new_with_str_sequence(&parts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let window = web_sys::window().ok_or_else(|| wasm_bindgen::JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    if let Some(body) = document.body() {
        body.append_child(&anchor)?;
        anchor.click();
        body.remove_child(&anchor)?;
    } else {
        anchor.click();
    }
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
