use serde_json::{Value, json};

/// Header of a typical import declaration, Cyrillic as it arrives from the filing system
pub fn header() -> Value {
    json!({
        "declarationDirection": "IM",
        "declarationProcedure": "40",
        "declarationForm": "EK",
        "registrationNumber": "10702070/180526/0012345",
        "exporterName": "Shenzhen Bright Trading Co., Ltd",
        "exporterAddress": "Futian District, Shenzhen",
        "exporterCountryCode": "CN",
        "consigneeName": "ООО Ромашка",
        "consigneeAddress": "г. Владивосток, ул. Светланская, 1",
        "consigneeIdentifier": "2536000000/253601001",
        "totalCustomsValue": 1648000,
        "invoiceCurrencyCode": "USD",
        "totalInvoiceAmount": "20 450,75",
        "exchangeRate": 80.5871,
        "deliveryTermsCode": "FOB",
        "deliveryTermsPlace": "SHENZHEN",
        "declarationPlace": "Владивосток",
        "declarationDate": "2026-05-18"
    })
}

/// One commodity item whose description names its 1-based position
pub fn item(ordinal: usize) -> Value {
    json!({
        "description": format!("Goods {}", ordinal),
        "commodityCode": "8471300000",
        "originCountryCode": "CN",
        "grossMass": 120.5 * ordinal as f64,
        "netMass": 100 * ordinal,
        "customsValue": 1000 * ordinal,
        "payments": {
            "duty": { "typeCode": "2010", "base": 1000, "rate": "5%", "amount": 50, "methodCode": "IU" },
            "tax": { "typeCode": "5010", "base": 1050, "rate": "20%", "amount": 210, "methodCode": "IU" }
        }
    })
}

pub fn items(count: usize) -> Vec<Value> {
    (1..=count).map(item).collect()
}

/// A full request with `count` items and the given options
pub fn request(count: usize, options: Value) -> Value {
    json!({
        "header": header(),
        "items": items(count),
        "options": options
    })
}

/// A full request with `count` items and default options
pub fn simple_request(count: usize) -> Value {
    request(count, json!({}))
}
