//! Module definitions - every CRUD-manageable entity type in one place.

use super::{Category, ColumnSpec, FieldDescriptor as F, ModuleDescriptor};

fn cols(names: &[&'static str]) -> Vec<ColumnSpec> {
    names.iter().map(|n| ColumnSpec::new(n)).collect()
}

pub(super) fn all_modules() -> Vec<ModuleDescriptor> {
    vec![
        // ============== MASTER DATA ==============
        ModuleDescriptor {
            key: "taxTypes",
            name: "Tax Types",
            endpoint: "/api/taxtypes",
            icon: "💰",
            category: Category::MasterData,
            fields: vec![
                F::text("Name").required().max_length(100),
                F::number("Value").required().min(0.0).max(100.0).step(0.01),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&["Name", "Value", "Active", "CreatedBy", "UpdatedBy"]),
            search_fields: vec!["Name"],
            label_fields: &["Name"],
        },
        ModuleDescriptor {
            key: "uom",
            name: "Units of Measure",
            endpoint: "/api/uom",
            icon: "📏",
            category: Category::MasterData,
            fields: vec![
                F::text("UnitName").label("Unit Name").required().max_length(100),
                F::boolean("IsPrimary").label("Is Primary").default_bool(false),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&["UnitName", "IsPrimary", "Active", "CreatedBy", "UpdatedBy"]),
            search_fields: vec!["UnitName"],
            label_fields: &["UnitName"],
        },
        ModuleDescriptor {
            key: "uomFactors",
            name: "UOM Factors",
            endpoint: "/api/uomfactors",
            icon: "🔄",
            category: Category::MasterData,
            fields: vec![
                F::select("PrimaryUOMId", "uom").label("Primary UOM").required(),
                F::select("SecondaryUOMId", "uom").label("Secondary UOM").required(),
                F::number("Factor").required().min(0.0).step(0.000001),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: vec![
                ColumnSpec::new("PrimaryUOMId").label("Primary UOM").reference("uom"),
                ColumnSpec::new("SecondaryUOMId").label("Secondary UOM").reference("uom"),
                ColumnSpec::new("Factor"),
                ColumnSpec::new("Active"),
                ColumnSpec::new("CreatedBy"),
                ColumnSpec::new("UpdatedBy"),
            ],
            search_fields: vec![],
            label_fields: super::DEFAULT_LABEL_FIELDS,
        },
        ModuleDescriptor {
            key: "categories",
            name: "Categories",
            endpoint: "/api/categories",
            icon: "📁",
            category: Category::MasterData,
            fields: vec![
                F::text("Name").required().max_length(100),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&["Name", "Active", "CreatedBy", "UpdatedBy"]),
            search_fields: vec!["Name"],
            label_fields: &["Name"],
        },
        ModuleDescriptor {
            key: "taxGroups",
            name: "Tax Groups",
            endpoint: "/api/taxgroups",
            icon: "📊",
            category: Category::MasterData,
            fields: vec![
                F::text("Name").required().max_length(100),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&["Name", "Active", "CreatedBy", "UpdatedBy"]),
            search_fields: vec!["Name"],
            label_fields: &["Name"],
        },
        ModuleDescriptor {
            key: "taxGroupTaxTypeMappers",
            name: "Tax Group Mappers",
            endpoint: "/api/taxgrouptaxtypemappers",
            icon: "🔗",
            category: Category::MasterData,
            fields: vec![
                F::select("TaxGroupId", "taxGroups").label("Tax Group").required(),
                F::select("TaxTypeId", "taxTypes").label("Tax Type").required(),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: vec![
                ColumnSpec::new("TaxGroupId").label("Tax Group").reference("taxGroups"),
                ColumnSpec::new("TaxTypeId").label("Tax Type").reference("taxTypes"),
                ColumnSpec::new("Active"),
                ColumnSpec::new("CreatedBy"),
                ColumnSpec::new("UpdatedBy"),
            ],
            search_fields: vec![],
            label_fields: super::DEFAULT_LABEL_FIELDS,
        },
        ModuleDescriptor {
            key: "accountTypes",
            name: "Account Types",
            endpoint: "/api/accounttypes",
            icon: "📒",
            category: Category::MasterData,
            fields: vec![
                F::text("Name").required().max_length(100),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&["Name", "Active", "CreatedBy", "UpdatedBy"]),
            search_fields: vec!["Name"],
            label_fields: &["Name"],
        },
        ModuleDescriptor {
            key: "accountTypeBases",
            name: "Account Type Bases",
            endpoint: "/api/accounttypebases",
            icon: "📚",
            category: Category::MasterData,
            fields: vec![
                F::text("Name").required().max_length(100),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&["Name", "Active", "CreatedBy", "UpdatedBy"]),
            search_fields: vec!["Name"],
            label_fields: &["Name"],
        },
        // ============== ORGANIZATION ==============
        ModuleDescriptor {
            key: "organizations",
            name: "Organizations",
            endpoint: "/api/organizations",
            icon: "🏛️",
            category: Category::Organization,
            fields: vec![
                F::text("Name").required().max_length(200),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&["Name", "Active", "CreatedBy", "UpdatedBy"]),
            search_fields: vec!["Name"],
            label_fields: &["Name"],
        },
        ModuleDescriptor {
            key: "branchDetails",
            name: "Branch Details",
            endpoint: "/api/branchdetails",
            icon: "🏢",
            category: Category::Organization,
            fields: vec![
                F::text("Name").required().max_length(100),
                F::select("AddressDetailId", "addressDetails").label("Address"),
                F::select("ContactDetailId", "contactDetails").label("Contact"),
                F::select("OrganizationId", "organizations").label("Organization"),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: vec![
                ColumnSpec::new("Name"),
                ColumnSpec::new("OrganizationId").label("Organization").reference("organizations"),
                ColumnSpec::new("Active"),
                ColumnSpec::new("CreatedBy"),
                ColumnSpec::new("UpdatedBy"),
            ],
            search_fields: vec!["Name"],
            label_fields: &["Name"],
        },
        ModuleDescriptor {
            key: "branchUserGroupMappers",
            name: "Branch User Groups",
            endpoint: "/api/branchusergroupmappers",
            icon: "👥",
            category: Category::Organization,
            fields: vec![
                F::select("BranchId", "branchDetails").label("Branch").required(),
                F::text("UserGroupId").label("User Group").required(),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: vec![
                ColumnSpec::new("BranchId").label("Branch").reference("branchDetails"),
                ColumnSpec::new("UserGroupId").label("User Group"),
                ColumnSpec::new("Active"),
                ColumnSpec::new("CreatedBy"),
                ColumnSpec::new("UpdatedBy"),
            ],
            search_fields: vec![],
            label_fields: super::DEFAULT_LABEL_FIELDS,
        },
        // ============== TRANSACTIONS ==============
        ModuleDescriptor {
            key: "transactionTypes",
            name: "Transaction Types",
            endpoint: "/api/transactiontypes",
            icon: "📋",
            category: Category::Transactions,
            fields: vec![
                F::text("Name").required().max_length(100),
                F::textarea("Description").max_length(255),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&["Name", "Description", "Active", "CreatedBy", "UpdatedBy"]),
            search_fields: vec!["Name", "Description"],
            label_fields: &["Name"],
        },
        ModuleDescriptor {
            key: "transactionTypeConfigs",
            name: "Transaction Configs",
            endpoint: "/api/transactiontypeconfigs",
            icon: "⚙️",
            category: Category::Transactions,
            fields: vec![
                F::number("StartCounterNo").label("Start Counter").required().min(0.0),
                F::text("Prefix").max_length(50),
                F::text("Format").required().max_length(100),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&[
                "Prefix",
                "Format",
                "StartCounterNo",
                "Active",
                "CreatedBy",
                "UpdatedBy",
            ]),
            search_fields: vec!["Prefix", "Format"],
            label_fields: super::DEFAULT_LABEL_FIELDS,
        },
        ModuleDescriptor {
            key: "transactionTypeStatuses",
            name: "Transaction Statuses",
            endpoint: "/api/transactiontypestatuses",
            icon: "🚦",
            category: Category::Transactions,
            fields: vec![
                F::text("Name").required().max_length(100),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&["Name", "Active", "CreatedBy", "UpdatedBy"]),
            search_fields: vec!["Name"],
            label_fields: &["Name"],
        },
        ModuleDescriptor {
            key: "transactionTypeBaseConversions",
            name: "Base Conversions",
            endpoint: "/api/transactiontypebaseconversions",
            icon: "🔀",
            category: Category::Transactions,
            fields: vec![
                F::select("TransactionTypeConfigId", "transactionTypeConfigs")
                    .label("Config")
                    .required(),
                F::select("FromTransactionTypeStatusId", "transactionTypeStatuses")
                    .label("From Status")
                    .required(),
                F::select("ToTransactionTypeStatusId", "transactionTypeStatuses")
                    .label("To Status")
                    .required(),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: vec![
                ColumnSpec::new("TransactionTypeConfigId")
                    .label("Config")
                    .reference("transactionTypeConfigs"),
                ColumnSpec::new("FromTransactionTypeStatusId")
                    .label("From Status")
                    .reference("transactionTypeStatuses"),
                ColumnSpec::new("ToTransactionTypeStatusId")
                    .label("To Status")
                    .reference("transactionTypeStatuses"),
                ColumnSpec::new("Active"),
                ColumnSpec::new("CreatedBy"),
                ColumnSpec::new("UpdatedBy"),
            ],
            search_fields: vec![],
            label_fields: super::DEFAULT_LABEL_FIELDS,
        },
        ModuleDescriptor {
            key: "transactionTypeConversionMappers",
            name: "Conversion Mappers",
            endpoint: "/api/transactiontypeconversionmappers",
            icon: "🗺️",
            category: Category::Transactions,
            fields: vec![
                F::select("TransactionTypeBaseConversionId", "transactionTypeBaseConversions")
                    .label("Base Conversion")
                    .required(),
                F::select("FromTransactionDetailLogId", "transactionDetailLogs")
                    .label("From Log")
                    .required(),
                F::select("ToTransactionDetailLogId", "transactionDetailLogs")
                    .label("To Log")
                    .required(),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: vec![
                ColumnSpec::new("TransactionTypeBaseConversionId")
                    .label("Base Conversion")
                    .reference("transactionTypeBaseConversions"),
                ColumnSpec::new("Active"),
                ColumnSpec::new("CreatedBy"),
                ColumnSpec::new("UpdatedBy"),
            ],
            search_fields: vec![],
            label_fields: super::DEFAULT_LABEL_FIELDS,
        },
        ModuleDescriptor {
            key: "transactionDetailLogs",
            name: "Transaction Logs",
            endpoint: "/api/transactiondetaillogs",
            icon: "📝",
            category: Category::Transactions,
            fields: vec![
                F::text("TransactionNo").label("Transaction No").required().max_length(100),
                F::select("TransactionTypeConfigId", "transactionTypeConfigs")
                    .label("Config")
                    .required(),
                F::select("TransactionTypeStatusId", "transactionTypeStatuses").label("Status"),
                F::select("BranchId", "branchDetails").label("Branch"),
                F::date("TransactionDate").label("Date"),
                F::textarea("Remarks").max_length(1000),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: vec![
                ColumnSpec::new("TransactionNo"),
                ColumnSpec::new("TransactionDate"),
                ColumnSpec::new("TransactionTypeStatusId")
                    .label("Status")
                    .reference("transactionTypeStatuses"),
                ColumnSpec::new("Active"),
                ColumnSpec::new("CreatedBy"),
                ColumnSpec::new("UpdatedBy"),
            ],
            search_fields: vec!["TransactionNo", "Remarks"],
            label_fields: &["TransactionNo"],
        },
        ModuleDescriptor {
            key: "transactionItemDetails",
            name: "Transaction Items",
            endpoint: "/api/transactionitemdetails",
            icon: "📦",
            category: Category::Transactions,
            fields: vec![
                F::select("TransactionDetailLogId", "transactionDetailLogs")
                    .label("Transaction Log")
                    .required(),
                F::select("ItemDetailId", "itemDetails").label("Item").required(),
                F::select("BatchDetailId", "batchDetails").label("Batch"),
                F::number("Quantity").required().step(0.0001),
                F::select("UOMId", "uom").label("UOM"),
                F::number("Rate").step(0.0001),
                F::number("Amount").step(0.0001),
                F::select("TaxGroupId", "taxGroups").label("Tax Group"),
                F::number("TaxAmount").label("Tax Amount").step(0.0001),
                F::number("DiscountAmount").label("Discount").step(0.0001),
                F::number("NetAmount").label("Net Amount").step(0.0001),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: vec![
                ColumnSpec::new("ItemDetailId").label("Item").reference("itemDetails"),
                ColumnSpec::new("Quantity"),
                ColumnSpec::new("Rate"),
                ColumnSpec::new("Amount"),
                ColumnSpec::new("NetAmount"),
                ColumnSpec::new("CreatedBy"),
                ColumnSpec::new("UpdatedBy"),
            ],
            search_fields: vec![],
            label_fields: super::DEFAULT_LABEL_FIELDS,
        },
        // ============== INVENTORY ==============
        ModuleDescriptor {
            key: "batchDetails",
            name: "Batch Details",
            endpoint: "/api/batchdetails",
            icon: "📦",
            category: Category::Inventory,
            fields: vec![
                F::text("BatchNumber").label("Batch Number").required().max_length(100),
                F::date("ManufacturedDate").label("Manufactured Date"),
                F::date("ExpiryDate").label("Expiry Date"),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&[
                "BatchNumber",
                "ManufacturedDate",
                "ExpiryDate",
                "Active",
                "CreatedBy",
                "UpdatedBy",
            ]),
            search_fields: vec!["BatchNumber"],
            label_fields: &["BatchNumber"],
        },
        ModuleDescriptor {
            key: "itemDetails",
            name: "Item Details",
            endpoint: "/api/itemdetails",
            icon: "🏷️",
            category: Category::Inventory,
            fields: vec![
                F::text("Name").required().max_length(255),
                F::text("Code").max_length(50),
                F::textarea("Description").max_length(1000),
                F::select("CategoryId", "categories").label("Category"),
                F::select("UOMId", "uom").label("UOM"),
                F::select("CostInfoId", "costInfos").label("Cost Info"),
                F::text("SKU").max_length(100),
                F::text("Barcode").max_length(100),
                F::text("HSNCode").label("HSN Code").max_length(50),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: vec![
                ColumnSpec::new("Name"),
                ColumnSpec::new("Code"),
                ColumnSpec::new("SKU"),
                ColumnSpec::new("CategoryId").label("Category").reference("categories"),
                ColumnSpec::new("Active"),
                ColumnSpec::new("CreatedBy"),
                ColumnSpec::new("UpdatedBy"),
            ],
            search_fields: vec!["Name", "Code", "SKU", "Barcode"],
            label_fields: &["Name"],
        },
        ModuleDescriptor {
            key: "costInfos",
            name: "Cost Info",
            endpoint: "/api/costinfos",
            icon: "💵",
            category: Category::Inventory,
            fields: vec![
                F::number("Amount").required().step(0.0001),
                F::select("TaxGroupId", "taxGroups").label("Tax Group"),
                F::boolean("IsTaxIncluded").label("Tax Included").default_bool(false),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: vec![
                ColumnSpec::new("Amount"),
                ColumnSpec::new("TaxGroupId").label("Tax Group").reference("taxGroups"),
                ColumnSpec::new("IsTaxIncluded"),
                ColumnSpec::new("Active"),
                ColumnSpec::new("CreatedBy"),
                ColumnSpec::new("UpdatedBy"),
            ],
            search_fields: vec![],
            label_fields: super::DEFAULT_LABEL_FIELDS,
        },
        // ============== CONTACTS & ADDRESSES ==============
        ModuleDescriptor {
            key: "contactAddressTypes",
            name: "Address Types",
            endpoint: "/api/contactaddresstypes",
            icon: "🏠",
            category: Category::Contacts,
            fields: vec![
                F::text("Name").required().max_length(100),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&["Name", "Active", "CreatedBy", "UpdatedBy"]),
            search_fields: vec!["Name"],
            label_fields: &["Name"],
        },
        ModuleDescriptor {
            key: "contactDetails",
            name: "Contact Details",
            endpoint: "/api/contactdetails",
            icon: "📞",
            category: Category::Contacts,
            fields: vec![
                F::text("FirstName").label("First Name").required().max_length(100),
                F::text("LastName").label("Last Name").max_length(100),
                F::text("MobileNo").label("Mobile No").max_length(20),
                F::text("AltMobileNo").label("Alt Mobile").max_length(20),
                F::text("Landline1").label("Landline 1").max_length(20),
                F::text("LandLine2").label("Landline 2").max_length(20),
                F::text("Ext1").label("Ext 1").max_length(10),
                F::text("Ext2").label("Ext 2").max_length(10),
                F::select("ContactAddressTypeId", "contactAddressTypes").label("Address Type"),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&[
                "FirstName",
                "LastName",
                "MobileNo",
                "Active",
                "CreatedBy",
                "UpdatedBy",
            ]),
            search_fields: vec!["FirstName", "LastName", "MobileNo"],
            label_fields: &["FirstName"],
        },
        ModuleDescriptor {
            key: "addressDetails",
            name: "Address Details",
            endpoint: "/api/addressdetails",
            icon: "📍",
            category: Category::Contacts,
            fields: vec![
                F::text("AddressLine1").label("Address Line 1").required().max_length(255),
                F::text("AddressLine2").label("Address Line 2").max_length(255),
                F::text("City").max_length(100),
                F::text("State").max_length(100),
                F::text("Pincode").max_length(20),
                F::text("Landmark").max_length(255),
                F::select("ContactAddressTypeId", "contactAddressTypes").label("Address Type"),
                F::select("MapProviderLocationMapperId", "mapProviderLocationMappers")
                    .label("Location"),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&[
                "AddressLine1",
                "City",
                "State",
                "Pincode",
                "Active",
                "CreatedBy",
                "UpdatedBy",
            ]),
            search_fields: vec!["AddressLine1", "City", "State", "Pincode"],
            label_fields: super::DEFAULT_LABEL_FIELDS,
        },
        ModuleDescriptor {
            key: "locationDetails",
            name: "Location Details",
            endpoint: "/api/locationdetails",
            icon: "🗺️",
            category: Category::Contacts,
            fields: vec![
                F::number("Lat").label("Latitude").required().step(0.00000001),
                F::number("Lng").label("Longitude").required().step(0.00000001),
                F::text("CF1").label("Custom Field 1").max_length(255),
                F::text("CF2").label("Custom Field 2").max_length(255),
                F::text("CF3").label("Custom Field 3").max_length(255),
                F::text("CF4").label("Custom Field 4").max_length(255),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&["Lat", "Lng", "Active", "CreatedBy", "UpdatedBy"]),
            search_fields: vec![],
            label_fields: super::DEFAULT_LABEL_FIELDS,
        },
        ModuleDescriptor {
            key: "mapProviders",
            name: "Map Providers",
            endpoint: "/api/mapproviders",
            icon: "🌍",
            category: Category::Contacts,
            fields: vec![
                F::text("ProviderName").label("Provider Name").required().max_length(100),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&["ProviderName", "Active", "CreatedBy", "UpdatedBy"]),
            search_fields: vec!["ProviderName"],
            label_fields: &["ProviderName"],
        },
        ModuleDescriptor {
            key: "mapProviderLocationMappers",
            name: "Location Mappers",
            endpoint: "/api/mapproviderlocationmappers",
            icon: "📌",
            category: Category::Contacts,
            fields: vec![
                F::select("MapProviderId", "mapProviders").label("Map Provider").required(),
                F::select("LocationDetailId", "locationDetails").label("Location").required(),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: vec![
                ColumnSpec::new("MapProviderId").label("Map Provider").reference("mapProviders"),
                ColumnSpec::new("LocationDetailId")
                    .label("Location")
                    .reference("locationDetails"),
                ColumnSpec::new("Active"),
                ColumnSpec::new("CreatedBy"),
                ColumnSpec::new("UpdatedBy"),
            ],
            search_fields: vec![],
            label_fields: super::DEFAULT_LABEL_FIELDS,
        },
        // ============== PAYMENTS ==============
        ModuleDescriptor {
            key: "paymentReceivedTypes",
            name: "Payment Received Types",
            endpoint: "/api/paymentreceivedtypes",
            icon: "💳",
            category: Category::Payments,
            fields: vec![
                F::text("Name").required().max_length(100),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&["Name", "Active", "CreatedBy", "UpdatedBy"]),
            search_fields: vec!["Name"],
            label_fields: &["Name"],
        },
        ModuleDescriptor {
            key: "paymentModes",
            name: "Payment Modes",
            endpoint: "/api/paymentmodes",
            icon: "💸",
            category: Category::Payments,
            fields: vec![
                F::text("Name").required().max_length(100),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: cols(&["Name", "Active", "CreatedBy", "UpdatedBy"]),
            search_fields: vec!["Name"],
            label_fields: &["Name"],
        },
        ModuleDescriptor {
            key: "paymentModeTransactionDetails",
            name: "Payment Transactions",
            endpoint: "/api/paymentmodetransactiondetails",
            icon: "🧾",
            category: Category::Payments,
            fields: vec![
                F::select("PaymentModeId", "paymentModes").label("Payment Mode").required(),
                F::select("TransactionDetailLogId", "transactionDetailLogs")
                    .label("Transaction")
                    .required(),
                F::number("Amount").required().step(0.0001),
                F::text("ReferenceNo").label("Reference No").max_length(100),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: vec![
                ColumnSpec::new("PaymentModeId").label("Payment Mode").reference("paymentModes"),
                ColumnSpec::new("Amount"),
                ColumnSpec::new("ReferenceNo"),
                ColumnSpec::new("Active"),
                ColumnSpec::new("CreatedBy"),
                ColumnSpec::new("UpdatedBy"),
            ],
            search_fields: vec!["ReferenceNo"],
            label_fields: super::DEFAULT_LABEL_FIELDS,
        },
        ModuleDescriptor {
            key: "paymentDetails",
            name: "Payment Details",
            endpoint: "/api/paymentdetails",
            icon: "💰",
            category: Category::Payments,
            fields: vec![
                F::select("PaymentReceivedTypeId", "paymentReceivedTypes")
                    .label("Received Type")
                    .required(),
                F::select("TransactionDetailLogId", "transactionDetailLogs")
                    .label("Transaction")
                    .required(),
                F::number("Amount").required().step(0.0001),
                F::date("PaymentDate").label("Payment Date"),
                F::text("ReferenceNo").label("Reference No").max_length(100),
                F::textarea("Remarks").max_length(500),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: vec![
                ColumnSpec::new("PaymentReceivedTypeId")
                    .label("Received Type")
                    .reference("paymentReceivedTypes"),
                ColumnSpec::new("Amount"),
                ColumnSpec::new("PaymentDate"),
                ColumnSpec::new("ReferenceNo"),
                ColumnSpec::new("Active"),
                ColumnSpec::new("CreatedBy"),
                ColumnSpec::new("UpdatedBy"),
            ],
            search_fields: vec!["ReferenceNo", "Remarks"],
            label_fields: super::DEFAULT_LABEL_FIELDS,
        },
        ModuleDescriptor {
            key: "paymentBreakups",
            name: "Payment Breakups",
            endpoint: "/api/paymentbreakups",
            icon: "📊",
            category: Category::Payments,
            fields: vec![
                F::select("PaymentDetailId", "paymentDetails").label("Payment Detail").required(),
                F::select("PaymentModeId", "paymentModes").label("Payment Mode").required(),
                F::number("Amount").required().step(0.0001),
                F::text("ReferenceNo").label("Reference No").max_length(100),
                F::textarea("Remarks").max_length(500),
                F::boolean("Active").default_bool(true),
            ],
            table_columns: vec![
                ColumnSpec::new("PaymentDetailId")
                    .label("Payment Detail")
                    .reference("paymentDetails"),
                ColumnSpec::new("PaymentModeId").label("Payment Mode").reference("paymentModes"),
                ColumnSpec::new("Amount"),
                ColumnSpec::new("ReferenceNo"),
                ColumnSpec::new("Active"),
                ColumnSpec::new("CreatedBy"),
                ColumnSpec::new("UpdatedBy"),
            ],
            search_fields: vec!["ReferenceNo", "Remarks"],
            label_fields: super::DEFAULT_LABEL_FIELDS,
        },
    ]
}
