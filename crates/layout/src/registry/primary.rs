//! Field placements for the primary sheet (full header plus the first item).
//!
//! Baselines sit 6 units above the bottom edge of a 25-unit block; text starts
//! 3 units inside the left edge. Taller blocks start their first line 17 units
//! below the top edge, clear of the block number badge.

use super::FieldEntry;
use crate::placement::FieldPlacement as P;

const fn h(p: P) -> FieldEntry {
    FieldEntry::header(p)
}

const fn i(p: P) -> FieldEntry {
    FieldEntry::item(p)
}

pub(super) const FIELDS: &[(&str, FieldEntry)] = &[
    // Block 1: declaration type
    ("declaration_direction", h(P::at(303.0, 803.0).width(41.0).center())),
    ("declaration_procedure", h(P::at(350.0, 803.0).width(41.0).center())),
    ("declaration_form", h(P::at(397.0, 803.0).width(40.0).center())),
    // Block A: registration number assigned by customs
    ("registration_number", h(P::at(443.0, 805.0).width(129.0).size(7.0).lines(3).bold())),
    // Blocks 3, 4, 5
    ("forms_current", h(P::at(303.0, 778.0).width(18.0).center())),
    ("forms_total", h(P::at(324.0, 778.0).width(18.0).center())),
    ("loading_lists", h(P::at(348.0, 778.0).width(39.0).center())),
    ("total_items", h(P::at(393.0, 778.0).width(44.0).center())),
    // Block 2: exporter
    ("exporter_name", h(P::at(23.0, 805.0).width(274.0).bold())),
    ("exporter_address", h(P::at(23.0, 795.0).width(274.0).size(7.0).lines(2))),
    ("exporter_identifier", h(P::at(23.0, 776.0).width(200.0).size(7.0))),
    ("exporter_country_code", h(P::at(250.0, 776.0).width(47.0).size(7.0).right())),
    // Block 8: consignee
    ("consignee_name", h(P::at(23.0, 755.0).width(274.0).bold())),
    ("consignee_address", h(P::at(23.0, 745.0).width(274.0).size(7.0).lines(2))),
    ("consignee_identifier", h(P::at(23.0, 726.0).width(200.0).size(7.0))),
    ("consignee_country_code", h(P::at(250.0, 726.0).width(47.0).size(7.0).right())),
    // Blocks 6, 7
    ("total_packages", h(P::at(303.0, 753.0).width(54.0).right())),
    ("reference_number", h(P::at(363.0, 753.0).width(209.0))),
    // Block 9: person responsible for financial settlement
    ("financial_party_name", h(P::at(315.0, 734.0).width(188.0).size(7.0))),
    ("financial_party_identifier", h(P::at(505.0, 734.0).width(67.0).size(7.0).right())),
    ("financial_party_address", h(P::at(303.0, 725.0).width(269.0).size(6.0))),
    // Block 14: declarant
    ("declarant_name", h(P::at(23.0, 705.0).width(274.0).bold())),
    ("declarant_address", h(P::at(23.0, 695.0).width(274.0).size(7.0).lines(2))),
    ("declarant_identifier", h(P::at(23.0, 676.0).width(274.0).size(7.0))),
    // Blocks 11, 12
    ("trading_country_code", h(P::at(303.0, 703.0).width(44.0).center())),
    ("total_customs_value", h(P::at(353.0, 703.0).width(219.0).right())),
    // Blocks 15, 15a, 17a
    ("dispatch_country_name", h(P::at(303.0, 678.0).width(134.0))),
    ("dispatch_country_code", h(P::at(443.0, 678.0).width(59.0).center())),
    ("destination_country_code", h(P::at(508.0, 678.0).width(64.0).center())),
    // Blocks 18, 19, 16, 17
    ("departure_transport_identity", h(P::at(23.0, 653.0).width(190.0).size(7.0))),
    ("departure_transport_country", h(P::at(215.0, 653.0).width(32.0).center())),
    ("container_indicator", h(P::at(253.0, 653.0).width(44.0).center())),
    ("origin_country_name", h(P::at(303.0, 653.0).width(134.0))),
    ("destination_country_name", h(P::at(443.0, 653.0).width(129.0))),
    // Blocks 21, 20
    ("border_transport_identity", h(P::at(23.0, 628.0).width(240.0).size(7.0))),
    ("border_transport_country", h(P::at(265.0, 628.0).width(32.0).center())),
    ("delivery_terms_code", h(P::at(303.0, 628.0).width(40.0))),
    ("delivery_terms_place", h(P::at(346.0, 628.0).width(226.0))),
    // Blocks 25, 26, 29
    ("border_transport_mode", h(P::at(23.0, 603.0).width(44.0).center())),
    ("inland_transport_mode", h(P::at(73.0, 603.0).width(44.0).center())),
    ("entry_customs_office", h(P::at(123.0, 603.0).width(174.0).size(7.0))),
    // Blocks 22, 23, 24
    ("invoice_currency_code", h(P::at(303.0, 603.0).width(30.0))),
    ("total_invoice_amount", h(P::at(336.0, 603.0).width(121.0).right())),
    ("exchange_rate", h(P::at(463.0, 603.0).width(49.0).size(7.0).right())),
    ("transaction_nature_code", h(P::at(518.0, 603.0).width(54.0).center())),
    // Blocks 30, 28
    ("goods_location", h(P::at(23.0, 580.0).width(274.0).size(7.0).lines(4))),
    ("bank_details", h(P::at(303.0, 580.0).width(269.0).size(7.0).lines(4))),
    // Block 31: package marks and goods description
    ("item_marks", i(P::at(23.0, 530.0).width(274.0).size(7.0))),
    ("item_description", i(P::at(23.0, 520.0).width(274.0).size(7.0).lines(10))),
    ("item_package_count", i(P::at(23.0, 432.0).width(60.0).size(7.0))),
    ("item_package_kind", i(P::at(86.0, 432.0).width(120.0).size(7.0))),
    ("item_manufacturer", i(P::at(23.0, 422.0).width(180.0).size(7.0))),
    ("item_trademark", i(P::at(206.0, 422.0).width(91.0).size(7.0))),
    ("item_containers", i(P::at(23.0, 412.0).width(274.0).size(7.0))),
    // Blocks 32, 33
    ("item_number", i(P::at(303.0, 528.0).width(44.0).center())),
    ("item_commodity_code", i(P::at(353.0, 528.0).width(120.0).mono())),
    ("item_commodity_extra", i(P::at(476.0, 528.0).width(96.0))),
    // Blocks 34 to 39
    ("item_origin_code", i(P::at(303.0, 503.0).width(74.0).center())),
    ("item_gross_mass", i(P::at(383.0, 503.0).width(94.0).right())),
    ("item_preference", i(P::at(483.0, 503.0).width(89.0).center())),
    ("item_procedure", i(P::at(303.0, 478.0).width(74.0).center())),
    ("item_net_mass", i(P::at(383.0, 478.0).width(94.0).right())),
    ("item_quota", i(P::at(483.0, 478.0).width(89.0).center())),
    // Block 40
    ("item_previous_document", i(P::at(303.0, 453.0).width(269.0).size(7.0))),
    // Blocks 41, 42, 43
    ("item_supplementary_quantity", i(P::at(303.0, 425.0).width(94.0).right())),
    ("item_supplementary_unit", i(P::at(303.0, 413.0).width(94.0).size(7.0).right())),
    ("item_price", i(P::at(403.0, 419.0).width(104.0).right())),
    ("item_valuation_method", i(P::at(513.0, 419.0).width(59.0).center())),
    // Block 44
    ("item_additional_info", i(P::at(23.0, 390.0).width(394.0).size(7.0).lines(8))),
    // Blocks 45, 46
    ("item_customs_value", i(P::at(423.0, 380.0).width(149.0).right())),
    ("item_statistical_value", i(P::at(423.0, 353.0).width(149.0).right())),
    // Block 47: payment calculation, one row per payment kind
    ("item_payment_duty_type", i(P::at(23.0, 285.0).width(39.0).center())),
    ("item_payment_duty_base", i(P::at(68.0, 285.0).width(89.0).right())),
    ("item_payment_duty_rate", i(P::at(163.0, 285.0).width(54.0).center())),
    ("item_payment_duty_amount", i(P::at(223.0, 285.0).width(89.0).right())),
    ("item_payment_duty_method", i(P::at(318.0, 285.0).width(29.0).center())),
    ("item_payment_tax_type", i(P::at(23.0, 263.0).width(39.0).center())),
    ("item_payment_tax_base", i(P::at(68.0, 263.0).width(89.0).right())),
    ("item_payment_tax_rate", i(P::at(163.0, 263.0).width(54.0).center())),
    ("item_payment_tax_amount", i(P::at(223.0, 263.0).width(89.0).right())),
    ("item_payment_tax_method", i(P::at(318.0, 263.0).width(29.0).center())),
    ("item_payment_fee_type", i(P::at(23.0, 241.0).width(39.0).center())),
    ("item_payment_fee_base", i(P::at(68.0, 241.0).width(89.0).right())),
    ("item_payment_fee_rate", i(P::at(163.0, 241.0).width(54.0).center())),
    ("item_payment_fee_amount", i(P::at(223.0, 241.0).width(89.0).right())),
    ("item_payment_fee_method", i(P::at(318.0, 241.0).width(29.0).center())),
    ("item_payment_total", i(P::at(223.0, 219.0).width(89.0).right().bold())),
    // Block 48, block B
    ("deferred_payment", h(P::at(423.0, 328.0).width(149.0).size(7.0))),
    ("accounting_details", h(P::at(353.0, 305.0).width(219.0).size(7.0).lines(10))),
    // Block 50: principal
    ("principal_name", h(P::at(23.0, 195.0).width(324.0).bold())),
    ("principal_details", h(P::at(23.0, 184.0).width(324.0).size(7.0).lines(5))),
    // Blocks 49, 52, 53
    ("warehouse_identifier", h(P::at(353.0, 193.0).width(219.0))),
    ("guarantee", h(P::at(353.0, 168.0).width(219.0).size(7.0))),
    ("destination_customs_office", h(P::at(353.0, 143.0).width(219.0).size(7.0))),
    // Blocks C, D
    ("customs_notes", h(P::at(23.0, 120.0).width(159.0).size(7.0).lines(10))),
    ("control_notes", h(P::at(188.0, 120.0).width(159.0).size(7.0).lines(10))),
    // Block 54: place, date and representative
    ("declaration_place", h(P::at(353.0, 120.0).width(219.0))),
    ("declaration_date", h(P::at(353.0, 108.0).width(100.0))),
    ("representative_name", h(P::at(353.0, 96.0).width(219.0).bold())),
    ("representative_position", h(P::at(353.0, 84.0).width(219.0).size(7.0))),
    ("representative_document", h(P::at(353.0, 72.0).width(219.0).size(7.0).lines(2))),
    ("representative_contact", h(P::at(353.0, 52.0).width(219.0).size(7.0))),
];
