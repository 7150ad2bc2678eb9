use super::signature::SignatureInput;
use crate::config::Ipay88Config;
use crate::modules::payments::models::CheckoutDetails;

/// Hidden-field form that the shopper's browser auto-posts to the iPay88
/// hosted payment page
#[derive(Debug, Clone, PartialEq)]
pub struct RedirectForm {
    pub action: String,
    /// Field name/value pairs in the order the gateway documents them
    pub fields: Vec<(&'static str, String)>,
}

impl RedirectForm {
    /// Signs the checkout and lays out every field the entry page expects
    pub fn build(config: &Ipay88Config, checkout: &CheckoutDetails) -> Self {
        let signature = SignatureInput {
            merchant_key: &config.merchant_key,
            merchant_code: &config.merchant_code,
            ref_no: &checkout.ref_no,
            amount: checkout.amount_minor,
            currency: checkout.currency,
        }
        .sign();

        let fields = vec![
            ("MerchantCode", config.merchant_code.clone()),
            // Left empty so the shopper picks a payment method on the gateway
            ("PaymentId", String::new()),
            ("RefNo", checkout.ref_no.clone()),
            ("Amount", checkout.amount_minor.to_string()),
            ("Currency", checkout.currency.code().to_string()),
            ("ProdDesc", checkout.description.clone()),
            ("UserName", checkout.user_name.clone()),
            ("UserEmail", checkout.user_email.clone()),
            ("UserContact", checkout.user_contact.clone()),
            ("Signature", signature),
            ("ResponseURL", config.response_url.clone()),
            ("BackendURL", config.backend_url.clone()),
        ];

        Self {
            action: config.entry_url(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// HTML document that submits the form as soon as it loads
    pub fn render(&self) -> String {
        let inputs: String = self
            .fields
            .iter()
            .map(|(name, value)| {
                format!(
                    "            <input type=\"hidden\" name=\"{}\" value=\"{}\" />\n",
                    name,
                    escape_attr(value)
                )
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html>
    <body onload="document.forms[0].submit()">
        <form method="post" action="{}">
{}        </form>
    </body>
</html>
"#,
            escape_attr(&self.action),
            inputs
        )
    }
}

/// Escapes a value for use inside a double-quoted HTML attribute
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
