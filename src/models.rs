//! Record types for the static business data each page renders. Rows are
//! `const` slices owned by the page files; nothing mutates them at runtime,
//! so everything here is `Copy` over `&'static str`.

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Tenant {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub location: &'static str,
    pub gstin: &'static str,
    pub status: TenantStatus,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TenantStatus {
    Active,
    Pending,
    Inactive,
}

impl TenantStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TenantStatus::Active => "active",
            TenantStatus::Pending => "pending",
            TenantStatus::Inactive => "inactive",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    pub id: &'static str,
    pub store: &'static str,
    /// Whole rupees, GST included.
    pub amount: i64,
    /// GST portion of `amount`, captured at billing time.
    pub gst: i64,
    pub method: PaymentMethod,
    pub date: &'static str,
    pub status: TransactionStatus,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Upi,
    Card,
    Cash,
    NetBanking,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Card",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::NetBanking => "Net Banking",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Refunded,
}

impl TransactionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Refunded => "refunded",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct StockItem {
    pub id: &'static str,
    pub name: &'static str,
    pub store: &'static str,
    pub category: &'static str,
    pub quantity: u32,
    pub reorder_level: u32,
    pub status: StockStatus,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StockStatus::InStock => "in stock",
            StockStatus::LowStock => "low stock",
            StockStatus::OutOfStock => "out of stock",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PurchaseOrder {
    pub id: &'static str,
    pub vendor: &'static str,
    pub date: &'static str,
    pub items: u32,
    /// Whole rupees.
    pub value: i64,
    pub status: OrderStatus,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Completed,
    Pending,
    Processing,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Completed => "completed",
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Payment {
    pub id: &'static str,
    pub tenant: &'static str,
    /// Whole rupees.
    pub amount: i64,
    pub gateway: Gateway,
    pub date: &'static str,
    pub status: PaymentStatus,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Gateway {
    Razorpay,
    Paytm,
    PhonePe,
    Upi,
}

impl Gateway {
    pub fn as_str(self) -> &'static str {
        match self {
            Gateway::Razorpay => "Razorpay",
            Gateway::Paytm => "Paytm",
            Gateway::PhonePe => "PhonePe",
            Gateway::Upi => "UPI",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Failed => "failed",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct IssueTicket {
    pub id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub reported_by: &'static str,
    pub date: &'static str,
    pub priority: IssuePriority,
    pub status: IssueStatus,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum IssuePriority {
    High,
    Medium,
    Low,
}

impl IssuePriority {
    pub fn as_str(self) -> &'static str {
        match self {
            IssuePriority::High => "high",
            IssuePriority::Medium => "medium",
            IssuePriority::Low => "low",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum IssueStatus {
    Open,
    InProgress,
    Resolved,
}

impl IssueStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueStatus::Open => "open",
            IssueStatus::InProgress => "in progress",
            IssueStatus::Resolved => "resolved",
        }
    }
}

/// A point on the dashboard revenue chart.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MonthlyRevenue {
    pub month: &'static str,
    /// Whole rupees.
    pub amount: i64,
}
