//! Customer payloads.

use serde::{Deserialize, Serialize};

use super::Extra;

/// A customer of the partner.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// The customer (tenant) identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Commerce identifier used by billing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commerce_id: Option<String>,
    /// The customer's company profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_profile: Option<CompanyProfile>,
    /// The customer's billing profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_profile: Option<CustomerBillingProfile>,
    /// How the customer is related to the partner (e.g. `reseller`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship_to_partner: Option<String>,
    /// Whether the partner has delegated admin privileges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_delegated_access: Option<bool>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A customer's company details.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    /// The Azure AD tenant identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    /// The default onmicrosoft.com domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// The company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A customer's billing contact and preferences.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBillingProfile {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Billing email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Culture used for formatting (e.g. `en-US`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,
    /// Language used for communications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Company name used on invoices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// The default billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_address: Option<Address>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A postal address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// ISO 3166 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// State, province or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// First street address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    /// Second street address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    /// Postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Contact first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Contact last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_keeps_unknown_fields() {
        let json = r#"{
            "id": "cust-1",
            "companyProfile": {"tenantId": "t-1", "companyName": "Contoso", "organizationRegistrationNumber": "42"},
            "associatedPartnerId": "p-9"
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();

        assert_eq!(customer.id.as_deref(), Some("cust-1"));
        let profile = customer.company_profile.as_ref().unwrap();
        assert_eq!(profile.company_name.as_deref(), Some("Contoso"));
        assert_eq!(profile.extra["organizationRegistrationNumber"], "42");
        assert_eq!(customer.extra["associatedPartnerId"], "p-9");

        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(value["associatedPartnerId"], "p-9");
        assert_eq!(value["companyProfile"]["tenantId"], "t-1");
        assert!(value.get("billingProfile").is_none());
    }
}
