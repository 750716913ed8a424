//! Which declaration attribute feeds which coordinate key.
//!
//! Fields are listed as `(key, accessor)` pairs and walked generically by the
//! assembler. [`check_bindings`] compares the keys against a coordinate
//! registry when a renderer is built, so a registry edit that forgets a field
//! (or a binding for a field that no longer exists) fails at startup instead
//! of producing a page with a silently missing value.

use crate::error::PipelineError;
use gtd_layout::{CoordinateRegistry, FieldScope, FieldValue, SheetVariant};
use gtd_types::{DeclarationHeader, LineItem, PaymentKind, PaymentRow};
use std::collections::BTreeSet;

/// Per-sheet values that are not stored in the declaration itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetContext {
    /// 1-based number of the sheet being drawn.
    pub sheet_number: usize,
    pub sheet_count: usize,
    pub item_count: usize,
}

pub type HeaderAccessor = for<'a> fn(&'a DeclarationHeader, &SheetContext) -> FieldValue<'a>;

/// The item accessor also receives the item's 1-based ordinal in the declaration.
pub type ItemAccessor = for<'a> fn(&'a LineItem, usize) -> FieldValue<'a>;

#[derive(Clone, Copy)]
pub struct HeaderBinding {
    pub key: &'static str,
    pub value: HeaderAccessor,
}

#[derive(Clone, Copy)]
pub struct ItemBinding {
    pub key: &'static str,
    pub value: ItemAccessor,
}

impl std::fmt::Debug for HeaderBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HeaderBinding").field(&self.key).finish()
    }
}

impl std::fmt::Debug for ItemBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ItemBinding").field(&self.key).finish()
    }
}

const fn header(key: &'static str, value: HeaderAccessor) -> HeaderBinding {
    HeaderBinding { key, value }
}

const fn item(key: &'static str, value: ItemAccessor) -> ItemBinding {
    ItemBinding { key, value }
}

fn sheet_number<'a>(_: &'a DeclarationHeader, sheet: &SheetContext) -> FieldValue<'a> {
    FieldValue::Integer(sheet.sheet_number as u64)
}

fn sheet_count<'a>(_: &'a DeclarationHeader, sheet: &SheetContext) -> FieldValue<'a> {
    FieldValue::Integer(sheet.sheet_count as u64)
}

/// Everything printed on the primary sheet outside the item area.
pub const PRIMARY_HEADER: &[HeaderBinding] = &[
    header("declaration_direction", |h, _| FieldValue::text(h.declaration_direction.as_ref())),
    header("declaration_procedure", |h, _| FieldValue::text(h.declaration_procedure.as_ref())),
    header("declaration_form", |h, _| FieldValue::text(h.declaration_form.as_ref())),
    header("registration_number", |h, _| FieldValue::text(h.registration_number.as_ref())),
    header("forms_current", sheet_number),
    header("forms_total", sheet_count),
    header("loading_lists", |h, _| FieldValue::text(h.loading_lists.as_ref())),
    header("total_items", |_, sheet| FieldValue::Integer(sheet.item_count as u64)),
    header("exporter_name", |h, _| FieldValue::text(h.exporter_name.as_ref())),
    header("exporter_address", |h, _| FieldValue::text(h.exporter_address.as_ref())),
    header("exporter_identifier", |h, _| FieldValue::text(h.exporter_identifier.as_ref())),
    header("exporter_country_code", |h, _| FieldValue::text(h.exporter_country_code.as_ref())),
    header("consignee_name", |h, _| FieldValue::text(h.consignee_name.as_ref())),
    header("consignee_address", |h, _| FieldValue::text(h.consignee_address.as_ref())),
    header("consignee_identifier", |h, _| FieldValue::text(h.consignee_identifier.as_ref())),
    header("consignee_country_code", |h, _| FieldValue::text(h.consignee_country_code.as_ref())),
    header("total_packages", |h, _| FieldValue::count(h.total_packages.as_ref())),
    header("reference_number", |h, _| FieldValue::text(h.reference_number.as_ref())),
    header("financial_party_name", |h, _| FieldValue::text(h.financial_party_name.as_ref())),
    header("financial_party_identifier", |h, _| {
        FieldValue::text(h.financial_party_identifier.as_ref())
    }),
    header("financial_party_address", |h, _| FieldValue::text(h.financial_party_address.as_ref())),
    header("declarant_name", |h, _| FieldValue::text(h.declarant_name.as_ref())),
    header("declarant_address", |h, _| FieldValue::text(h.declarant_address.as_ref())),
    header("declarant_identifier", |h, _| FieldValue::text(h.declarant_identifier.as_ref())),
    header("trading_country_code", |h, _| FieldValue::text(h.trading_country_code.as_ref())),
    header("total_customs_value", |h, _| FieldValue::amount(h.total_customs_value.as_ref())),
    header("dispatch_country_name", |h, _| FieldValue::text(h.dispatch_country_name.as_ref())),
    header("dispatch_country_code", |h, _| FieldValue::text(h.dispatch_country_code.as_ref())),
    header("destination_country_code", |h, _| {
        FieldValue::text(h.destination_country_code.as_ref())
    }),
    header("departure_transport_identity", |h, _| {
        FieldValue::text(h.departure_transport_identity.as_ref())
    }),
    header("departure_transport_country", |h, _| {
        FieldValue::text(h.departure_transport_country.as_ref())
    }),
    header("container_indicator", |h, _| FieldValue::text(h.container_indicator.as_ref())),
    header("origin_country_name", |h, _| FieldValue::text(h.origin_country_name.as_ref())),
    header("destination_country_name", |h, _| {
        FieldValue::text(h.destination_country_name.as_ref())
    }),
    header("border_transport_identity", |h, _| {
        FieldValue::text(h.border_transport_identity.as_ref())
    }),
    header("border_transport_country", |h, _| {
        FieldValue::text(h.border_transport_country.as_ref())
    }),
    header("delivery_terms_code", |h, _| FieldValue::text(h.delivery_terms_code.as_ref())),
    header("delivery_terms_place", |h, _| FieldValue::text(h.delivery_terms_place.as_ref())),
    header("border_transport_mode", |h, _| FieldValue::text(h.border_transport_mode.as_ref())),
    header("inland_transport_mode", |h, _| FieldValue::text(h.inland_transport_mode.as_ref())),
    header("entry_customs_office", |h, _| FieldValue::text(h.entry_customs_office.as_ref())),
    header("invoice_currency_code", |h, _| FieldValue::text(h.invoice_currency_code.as_ref())),
    header("total_invoice_amount", |h, _| FieldValue::amount(h.total_invoice_amount.as_ref())),
    header("exchange_rate", |h, _| FieldValue::rate(h.exchange_rate.as_ref())),
    header("transaction_nature_code", |h, _| {
        FieldValue::text(h.transaction_nature_code.as_ref())
    }),
    header("goods_location", |h, _| FieldValue::text(h.goods_location.as_ref())),
    header("bank_details", |h, _| FieldValue::text(h.bank_details.as_ref())),
    header("deferred_payment", |h, _| FieldValue::text(h.deferred_payment.as_ref())),
    header("accounting_details", |h, _| FieldValue::text(h.accounting_details.as_ref())),
    header("principal_name", |h, _| FieldValue::text(h.principal_name.as_ref())),
    header("principal_details", |h, _| FieldValue::text(h.principal_details.as_ref())),
    header("warehouse_identifier", |h, _| FieldValue::text(h.warehouse_identifier.as_ref())),
    header("guarantee", |h, _| FieldValue::text(h.guarantee.as_ref())),
    header("destination_customs_office", |h, _| {
        FieldValue::text(h.destination_customs_office.as_ref())
    }),
    header("customs_notes", |h, _| FieldValue::text(h.customs_notes.as_ref())),
    header("control_notes", |h, _| FieldValue::text(h.control_notes.as_ref())),
    header("declaration_place", |h, _| FieldValue::text(h.declaration_place.as_ref())),
    header("declaration_date", |h, _| FieldValue::date(h.declaration_date.as_ref())),
    header("representative_name", |h, _| FieldValue::text(h.representative_name.as_ref())),
    header("representative_position", |h, _| {
        FieldValue::text(h.representative_position.as_ref())
    }),
    header("representative_document", |h, _| {
        FieldValue::text(h.representative_document.as_ref())
    }),
    header("representative_contact", |h, _| FieldValue::text(h.representative_contact.as_ref())),
];

/// The abbreviated header repeated on every continuation sheet.
pub const CONTINUATION_HEADER: &[HeaderBinding] = &[
    header("exporter_name", |h, _| FieldValue::text(h.exporter_name.as_ref())),
    header("consignee_name", |h, _| FieldValue::text(h.consignee_name.as_ref())),
    header("declaration_direction", |h, _| FieldValue::text(h.declaration_direction.as_ref())),
    header("declaration_procedure", |h, _| FieldValue::text(h.declaration_procedure.as_ref())),
    header("declaration_form", |h, _| FieldValue::text(h.declaration_form.as_ref())),
    header("forms_current", sheet_number),
    header("forms_total", sheet_count),
    header("registration_number", |h, _| FieldValue::text(h.registration_number.as_ref())),
];

fn payment<'a>(item: &'a LineItem, kind: PaymentKind) -> &'a PaymentRow {
    item.payments.row(kind)
}

/// Item fields, identical on both sheet variants.
pub const ITEM: &[ItemBinding] = &[
    item("item_marks", |i, _| FieldValue::text(i.marks.as_ref())),
    item("item_description", |i, _| FieldValue::text(i.description.as_ref())),
    item("item_package_count", |i, _| FieldValue::count(i.package_count.as_ref())),
    item("item_package_kind", |i, _| FieldValue::text(i.package_kind.as_ref())),
    item("item_manufacturer", |i, _| FieldValue::text(i.manufacturer.as_ref())),
    item("item_trademark", |i, _| FieldValue::text(i.trademark.as_ref())),
    item("item_containers", |i, _| FieldValue::text(i.container_numbers.as_ref())),
    item("item_number", |_, ordinal| FieldValue::Integer(ordinal as u64)),
    item("item_commodity_code", |i, _| FieldValue::text(i.commodity_code.as_ref())),
    item("item_commodity_extra", |i, _| FieldValue::text(i.commodity_code_extra.as_ref())),
    item("item_origin_code", |i, _| FieldValue::text(i.origin_country_code.as_ref())),
    item("item_gross_mass", |i, _| FieldValue::amount(i.gross_mass.as_ref())),
    item("item_preference", |i, _| FieldValue::text(i.preference.as_ref())),
    item("item_procedure", |i, _| FieldValue::text(i.procedure_code.as_ref())),
    item("item_net_mass", |i, _| FieldValue::amount(i.net_mass.as_ref())),
    item("item_quota", |i, _| FieldValue::text(i.quota.as_ref())),
    item("item_previous_document", |i, _| FieldValue::text(i.previous_document.as_ref())),
    item("item_supplementary_quantity", |i, _| {
        FieldValue::amount(i.supplementary_quantity.as_ref())
    }),
    item("item_supplementary_unit", |i, _| FieldValue::text(i.supplementary_unit.as_ref())),
    item("item_price", |i, _| FieldValue::amount(i.item_price.as_ref())),
    item("item_valuation_method", |i, _| FieldValue::text(i.valuation_method.as_ref())),
    item("item_additional_info", |i, _| FieldValue::text(i.additional_info.as_ref())),
    item("item_customs_value", |i, _| FieldValue::amount(i.customs_value.as_ref())),
    item("item_statistical_value", |i, _| FieldValue::amount(i.statistical_value.as_ref())),
    item("item_payment_duty_type", |i, _| {
        FieldValue::text(payment(i, PaymentKind::Duty).type_code.as_ref())
    }),
    item("item_payment_duty_base", |i, _| {
        FieldValue::amount(payment(i, PaymentKind::Duty).base.as_ref())
    }),
    item("item_payment_duty_rate", |i, _| {
        FieldValue::text(payment(i, PaymentKind::Duty).rate.as_ref())
    }),
    item("item_payment_duty_amount", |i, _| {
        FieldValue::amount(payment(i, PaymentKind::Duty).amount.as_ref())
    }),
    item("item_payment_duty_method", |i, _| {
        FieldValue::text(payment(i, PaymentKind::Duty).method_code.as_ref())
    }),
    item("item_payment_tax_type", |i, _| {
        FieldValue::text(payment(i, PaymentKind::Tax).type_code.as_ref())
    }),
    item("item_payment_tax_base", |i, _| {
        FieldValue::amount(payment(i, PaymentKind::Tax).base.as_ref())
    }),
    item("item_payment_tax_rate", |i, _| {
        FieldValue::text(payment(i, PaymentKind::Tax).rate.as_ref())
    }),
    item("item_payment_tax_amount", |i, _| {
        FieldValue::amount(payment(i, PaymentKind::Tax).amount.as_ref())
    }),
    item("item_payment_tax_method", |i, _| {
        FieldValue::text(payment(i, PaymentKind::Tax).method_code.as_ref())
    }),
    item("item_payment_fee_type", |i, _| {
        FieldValue::text(payment(i, PaymentKind::Fee).type_code.as_ref())
    }),
    item("item_payment_fee_base", |i, _| {
        FieldValue::amount(payment(i, PaymentKind::Fee).base.as_ref())
    }),
    item("item_payment_fee_rate", |i, _| {
        FieldValue::text(payment(i, PaymentKind::Fee).rate.as_ref())
    }),
    item("item_payment_fee_amount", |i, _| {
        FieldValue::amount(payment(i, PaymentKind::Fee).amount.as_ref())
    }),
    item("item_payment_fee_method", |i, _| {
        FieldValue::text(payment(i, PaymentKind::Fee).method_code.as_ref())
    }),
    item("item_payment_total", |i, _| FieldValue::from_f64(i.payment_total())),
];

/// Header bindings drawn on a sheet of `variant`.
pub fn header_bindings(variant: SheetVariant) -> &'static [HeaderBinding] {
    match variant {
        SheetVariant::Primary => PRIMARY_HEADER,
        SheetVariant::Continuation => CONTINUATION_HEADER,
    }
}

fn compare_keys<'k>(
    variant: SheetVariant,
    scope: FieldScope,
    bound: impl Iterator<Item = &'k str>,
    registered: impl Iterator<Item = &'k str>,
    problems: &mut Vec<String>,
) {
    let mut bound_keys = BTreeSet::new();
    for key in bound {
        if !bound_keys.insert(key) {
            problems.push(format!("{} {:?} key '{}' is bound twice", variant, scope, key));
        }
    }
    let registered: BTreeSet<&str> = registered.collect();

    for key in bound_keys.difference(&registered) {
        problems.push(format!(
            "{:?} field '{}' is bound but has no {} sheet placement",
            scope, key, variant
        ));
    }
    for key in registered.difference(&bound_keys) {
        problems.push(format!(
            "{:?} placement '{}' on the {} sheet has no binding",
            scope, key, variant
        ));
    }
}

/// Verifies that the bindings and `registry` describe exactly the same fields.
///
/// All mismatches are collected into one `Configuration` error.
pub fn check_bindings(registry: &CoordinateRegistry) -> Result<(), PipelineError> {
    let mut problems = Vec::new();
    for variant in [SheetVariant::Primary, SheetVariant::Continuation] {
        let set = registry.set(variant);
        compare_keys(
            variant,
            FieldScope::Header,
            header_bindings(variant).iter().map(|b| b.key),
            set.keys(FieldScope::Header),
            &mut problems,
        );
        compare_keys(
            variant,
            FieldScope::Item,
            ITEM.iter().map(|b| b.key),
            set.keys(FieldScope::Item),
            &mut problems,
        );
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(PipelineError::Configuration(format!(
            "coordinate registry '{}' does not match the field bindings: {}",
            registry.version,
            problems.join("; ")
        )))
    }
}
