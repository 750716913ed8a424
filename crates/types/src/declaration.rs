//! The declaration record as handed over by the declaration-management layer.
//!
//! Every attribute is optional: the renderer draws whatever it is given and
//! leaves the rest of the form blank. Reference codes (countries, currencies,
//! customs offices) arrive already resolved to their display text.

use serde::{Deserialize, Serialize};

/// A monetary amount, mass or count as supplied by the caller.
///
/// Upstream forms submit either JSON numbers or free text such as
/// `"1 648 000,50"`, so both are accepted here and parsed lazily.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    /// Returns the numeric value, or `None` when the text is not a finite number.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Amount::Number(value) => value.is_finite().then_some(*value),
            Amount::Text(raw) => parse_numeric_text(raw),
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

fn parse_numeric_text(raw: &str) -> Option<f64> {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}' && *c != '\u{202f}')
        .collect();
    if compact.is_empty() {
        return None;
    }
    // With both separators present the rightmost one is the decimal mark.
    let normalized = match (compact.rfind(','), compact.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => compact.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => compact.replace(',', ""),
        (Some(_), None) if compact.matches(',').count() == 1 => compact.replace(',', "."),
        (Some(_), None) if is_comma_grouped(&compact) => compact.replace(',', ""),
        (Some(_), None) => return None,
        (None, _) => compact,
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `1,648,000`: a lead of up to three digits followed by groups of exactly three.
fn is_comma_grouped(text: &str) -> bool {
    let mut groups = text.split(',');
    let lead = groups
        .next()
        .unwrap_or_default()
        .trim_start_matches(['-', '+']);
    (1..=3).contains(&lead.len())
        && lead.bytes().all(|b| b.is_ascii_digit())
        && groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()))
}

/// Header-level attributes of the declaration, grouped by form block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeclarationHeader {
    // Box 1: declaration type
    pub declaration_direction: Option<String>,
    pub declaration_procedure: Option<String>,
    pub declaration_form: Option<String>,
    // Box A: registration number assigned by the customs office
    pub registration_number: Option<String>,

    // Box 2: exporter / consignor
    pub exporter_name: Option<String>,
    pub exporter_address: Option<String>,
    pub exporter_country_code: Option<String>,
    pub exporter_identifier: Option<String>,
    // Box 4
    pub loading_lists: Option<String>,
    // Box 6
    pub total_packages: Option<Amount>,
    // Box 7
    pub reference_number: Option<String>,
    // Box 8: consignee
    pub consignee_name: Option<String>,
    pub consignee_address: Option<String>,
    pub consignee_country_code: Option<String>,
    pub consignee_identifier: Option<String>,
    // Box 9: person responsible for financial settlement
    pub financial_party_name: Option<String>,
    pub financial_party_address: Option<String>,
    pub financial_party_identifier: Option<String>,
    // Box 11
    pub trading_country_code: Option<String>,
    // Box 12
    pub total_customs_value: Option<Amount>,
    // Box 14: declarant
    pub declarant_name: Option<String>,
    pub declarant_address: Option<String>,
    pub declarant_identifier: Option<String>,

    // Boxes 15-17: countries
    pub dispatch_country_name: Option<String>,
    pub dispatch_country_code: Option<String>,
    pub origin_country_name: Option<String>,
    pub destination_country_name: Option<String>,
    pub destination_country_code: Option<String>,

    // Boxes 18-21: transport
    pub departure_transport_identity: Option<String>,
    pub departure_transport_country: Option<String>,
    pub container_indicator: Option<String>,
    pub delivery_terms_code: Option<String>,
    pub delivery_terms_place: Option<String>,
    pub border_transport_identity: Option<String>,
    pub border_transport_country: Option<String>,

    // Boxes 22-24: financial
    pub invoice_currency_code: Option<String>,
    pub total_invoice_amount: Option<Amount>,
    pub exchange_rate: Option<Amount>,
    pub transaction_nature_code: Option<String>,

    // Boxes 25-30
    pub border_transport_mode: Option<String>,
    pub inland_transport_mode: Option<String>,
    pub bank_details: Option<String>,
    pub entry_customs_office: Option<String>,
    pub goods_location: Option<String>,

    // Boxes B, 48-53
    pub accounting_details: Option<String>,
    pub deferred_payment: Option<String>,
    pub warehouse_identifier: Option<String>,
    pub principal_name: Option<String>,
    pub principal_details: Option<String>,
    pub guarantee: Option<String>,
    pub destination_customs_office: Option<String>,

    // Box 54: place, date and the person who filed the declaration
    pub declaration_place: Option<String>,
    pub declaration_date: Option<String>,
    pub representative_name: Option<String>,
    pub representative_position: Option<String>,
    pub representative_document: Option<String>,
    pub representative_contact: Option<String>,

    // Boxes C and D: customs office marks
    pub customs_notes: Option<String>,
    pub control_notes: Option<String>,
}

/// One commodity entry of the declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItem {
    // Box 31: packages and description of goods
    pub description: Option<String>,
    pub marks: Option<String>,
    pub package_count: Option<Amount>,
    pub package_kind: Option<String>,
    pub container_numbers: Option<String>,
    pub manufacturer: Option<String>,
    pub trademark: Option<String>,
    // Box 33
    pub commodity_code: Option<String>,
    pub commodity_code_extra: Option<String>,
    // Box 34
    pub origin_country_code: Option<String>,
    // Boxes 35-39
    pub gross_mass: Option<Amount>,
    pub preference: Option<String>,
    pub procedure_code: Option<String>,
    pub net_mass: Option<Amount>,
    pub quota: Option<String>,
    // Box 40
    pub previous_document: Option<String>,
    // Box 41
    pub supplementary_quantity: Option<Amount>,
    pub supplementary_unit: Option<String>,
    // Boxes 42-43
    pub item_price: Option<Amount>,
    pub valuation_method: Option<String>,
    // Box 44
    pub additional_info: Option<String>,
    // Boxes 45-46
    pub customs_value: Option<Amount>,
    pub statistical_value: Option<Amount>,
    // Box 47
    pub payments: PaymentBreakdown,
}

impl LineItem {
    /// Sum of all parseable payment amounts, or `None` if no row has one.
    pub fn payment_total(&self) -> Option<f64> {
        self.payments
            .rows()
            .into_iter()
            .filter_map(|(_, row)| row.amount.as_ref().and_then(Amount::to_f64))
            .fold(None, |acc, amount| Some(acc.unwrap_or(0.0) + amount))
    }
}

/// One row of the box 47 payment calculation table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentRow {
    pub type_code: Option<String>,
    pub base: Option<Amount>,
    pub rate: Option<String>,
    pub amount: Option<Amount>,
    pub method_code: Option<String>,
}

/// The rows of the payment table, in printed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentKind {
    Duty,
    Tax,
    Fee,
}

impl PaymentKind {
    pub const ALL: [PaymentKind; 3] = [PaymentKind::Duty, PaymentKind::Tax, PaymentKind::Fee];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::Duty => "duty",
            PaymentKind::Tax => "tax",
            PaymentKind::Fee => "fee",
        }
    }
}

/// The fixed three-row payment breakdown of a line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentBreakdown {
    pub duty: PaymentRow,
    pub tax: PaymentRow,
    pub fee: PaymentRow,
}

impl PaymentBreakdown {
    pub fn row(&self, kind: PaymentKind) -> &PaymentRow {
        match kind {
            PaymentKind::Duty => &self.duty,
            PaymentKind::Tax => &self.tax,
            PaymentKind::Fee => &self.fee,
        }
    }

    pub fn rows(&self) -> [(PaymentKind, &PaymentRow); 3] {
        PaymentKind::ALL.map(|kind| (kind, self.row(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_parses_numbers_and_text() {
        assert_eq!(Amount::Number(12.5).to_f64(), Some(12.5));
        assert_eq!(Amount::from("1 648 000,50").to_f64(), Some(1_648_000.5));
        assert_eq!(Amount::from("1,648,000.50").to_f64(), Some(1_648_000.5));
        assert_eq!(Amount::from("0").to_f64(), Some(0.0));

        // Several commas in groups of three are thousands separators.
        assert_eq!(Amount::from("1,648,000").to_f64(), Some(1_648_000.0));
        assert_eq!(Amount::from("-12,500,000").to_f64(), Some(-12_500_000.0));
        // A single comma is the decimal mark.
        assert_eq!(Amount::from("1648000,50").to_f64(), Some(1_648_000.5));
        assert_eq!(Amount::from("25,5").to_f64(), Some(25.5));
        // Dots grouping, comma decimal.
        assert_eq!(Amount::from("1.648.000,50").to_f64(), Some(1_648_000.5));
    }

    #[test]
    fn test_amount_rejects_garbage() {
        assert_eq!(Amount::from("n/a").to_f64(), None);
        assert_eq!(Amount::from("   ").to_f64(), None);
        assert_eq!(Amount::from("1,2,3").to_f64(), None);
        assert_eq!(Amount::from("1,6480,000").to_f64(), None);
        assert_eq!(Amount::Number(f64::NAN).to_f64(), None);
        assert_eq!(Amount::Number(f64::INFINITY).to_f64(), None);
    }

    #[test]
    fn test_payment_total_skips_unparseable_rows() {
        let mut item = LineItem::default();
        assert_eq!(item.payment_total(), None);

        item.payments.duty.amount = Some(Amount::Number(100.0));
        item.payments.tax.amount = Some(Amount::from("abc"));
        item.payments.fee.amount = Some(Amount::from("25,50"));
        assert_eq!(item.payment_total(), Some(125.5));
    }

    #[test]
    fn test_deserialize_camel_case_with_mixed_amounts() {
        let json = r#"{
            "description": "Bearings",
            "grossMass": "1 200,5",
            "netMass": 1100,
            "payments": { "duty": { "typeCode": "2010", "amount": 55.1 } }
        }"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.description.as_deref(), Some("Bearings"));
        assert_eq!(item.gross_mass.as_ref().and_then(Amount::to_f64), Some(1200.5));
        assert_eq!(item.net_mass, Some(Amount::Number(1100.0)));
        assert_eq!(item.payments.duty.type_code.as_deref(), Some("2010"));
        assert_eq!(item.payments.fee, PaymentRow::default());
    }
}
