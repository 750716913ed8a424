//! Field placements for continuation sheets.
//!
//! Item fields describe the topmost item block (top edge at 772). The second
//! and third blocks reuse them shifted by the item offset.

use super::FieldEntry;
use crate::placement::FieldPlacement as P;

const fn h(p: P) -> FieldEntry {
    FieldEntry::header(p)
}

const fn i(p: P) -> FieldEntry {
    FieldEntry::item(p)
}

pub(super) const FIELDS: &[(&str, FieldEntry)] = &[
    // Abbreviated header: parties, declaration type, sheet sequence, number
    ("exporter_name", h(P::at(23.0, 805.0).width(194.0).size(7.0).lines(3))),
    ("consignee_name", h(P::at(223.0, 805.0).width(144.0).size(7.0).lines(3))),
    ("declaration_direction", h(P::at(373.0, 803.0).width(28.0).center())),
    ("declaration_procedure", h(P::at(404.0, 803.0).width(28.0).center())),
    ("declaration_form", h(P::at(437.0, 803.0).width(30.0).center())),
    ("forms_current", h(P::at(373.0, 778.0).width(45.0).center())),
    ("forms_total", h(P::at(422.0, 778.0).width(45.0).center())),
    ("registration_number", h(P::at(473.0, 805.0).width(99.0).size(7.0).lines(3).bold())),
    // Block 31
    ("item_marks", i(P::at(23.0, 755.0).width(274.0).size(7.0))),
    ("item_description", i(P::at(23.0, 745.0).width(274.0).size(7.0).lines(11))),
    ("item_package_count", i(P::at(23.0, 648.0).width(60.0).size(7.0))),
    ("item_package_kind", i(P::at(86.0, 648.0).width(120.0).size(7.0))),
    ("item_manufacturer", i(P::at(23.0, 638.0).width(180.0).size(7.0))),
    ("item_trademark", i(P::at(206.0, 638.0).width(91.0).size(7.0))),
    ("item_containers", i(P::at(23.0, 628.0).width(274.0).size(7.0))),
    // Blocks 32, 33
    ("item_number", i(P::at(303.0, 753.0).width(44.0).center())),
    ("item_commodity_code", i(P::at(353.0, 753.0).width(120.0).mono())),
    ("item_commodity_extra", i(P::at(476.0, 753.0).width(96.0))),
    // Blocks 34 to 39
    ("item_origin_code", i(P::at(303.0, 728.0).width(74.0).center())),
    ("item_gross_mass", i(P::at(383.0, 728.0).width(94.0).right())),
    ("item_preference", i(P::at(483.0, 728.0).width(89.0).center())),
    ("item_procedure", i(P::at(303.0, 703.0).width(74.0).center())),
    ("item_net_mass", i(P::at(383.0, 703.0).width(94.0).right())),
    ("item_quota", i(P::at(483.0, 703.0).width(89.0).center())),
    // Block 40
    ("item_previous_document", i(P::at(303.0, 678.0).width(269.0).size(7.0))),
    // Blocks 41, 42, 43
    ("item_supplementary_quantity", i(P::at(303.0, 653.0).width(60.0).right())),
    ("item_supplementary_unit", i(P::at(366.0, 653.0).width(31.0).size(7.0))),
    ("item_price", i(P::at(403.0, 653.0).width(104.0).right())),
    ("item_valuation_method", i(P::at(513.0, 653.0).width(59.0).center())),
    // Blocks 45, 46
    ("item_customs_value", i(P::at(303.0, 628.0).width(134.0).right())),
    ("item_statistical_value", i(P::at(443.0, 628.0).width(129.0).right())),
    // Block 44
    ("item_additional_info", i(P::at(23.0, 605.0).width(224.0).size(7.0).lines(9))),
    // Block 47
    ("item_payment_duty_type", i(P::at(253.0, 593.0).width(39.0).center())),
    ("item_payment_duty_base", i(P::at(298.0, 593.0).width(84.0).right())),
    ("item_payment_duty_rate", i(P::at(388.0, 593.0).width(49.0).center())),
    ("item_payment_duty_amount", i(P::at(443.0, 593.0).width(89.0).right())),
    ("item_payment_duty_method", i(P::at(538.0, 593.0).width(34.0).center())),
    ("item_payment_tax_type", i(P::at(253.0, 576.0).width(39.0).center())),
    ("item_payment_tax_base", i(P::at(298.0, 576.0).width(84.0).right())),
    ("item_payment_tax_rate", i(P::at(388.0, 576.0).width(49.0).center())),
    ("item_payment_tax_amount", i(P::at(443.0, 576.0).width(89.0).right())),
    ("item_payment_tax_method", i(P::at(538.0, 576.0).width(34.0).center())),
    ("item_payment_fee_type", i(P::at(253.0, 559.0).width(39.0).center())),
    ("item_payment_fee_base", i(P::at(298.0, 559.0).width(84.0).right())),
    ("item_payment_fee_rate", i(P::at(388.0, 559.0).width(49.0).center())),
    ("item_payment_fee_amount", i(P::at(443.0, 559.0).width(89.0).right())),
    ("item_payment_fee_method", i(P::at(538.0, 559.0).width(34.0).center())),
    ("item_payment_total", i(P::at(443.0, 536.0).width(89.0).right().bold())),
];
