use strum::{Display, EnumIter};

/// Field keys that carry label or structural data and never become metric
/// values in their own right.
pub const RESERVED_FIELDS: [&str; 4] = ["address", "version", "experimental", "strategies"];

/// A product category's static mapping to metric name and label schema.
#[derive(Debug, PartialEq, Eq)]
pub struct MetricSchema {
    /// Metric name submitted as the `__name__` label.
    pub metric: &'static str,

    /// Ordered label names; samples carry exactly these keys, in this order.
    pub labels: &'static [&'static str],

    /// Whether label resolution appends the experimental flag.
    pub experimental: bool,
}

const TOKEN_SCHEMA: MetricSchema = MetricSchema {
    metric: "token",
    labels: &["token", "param", "address", "version"],
    experimental: false,
};

const POOL_SCHEMA: MetricSchema = MetricSchema {
    metric: "pool",
    labels: &["pair", "param", "address", "version"],
    experimental: false,
};

const ROUTER_SCHEMA: MetricSchema = MetricSchema {
    metric: "router",
    labels: &["route", "param", "address", "version"],
    experimental: false,
};

const VAULT_SCHEMA: MetricSchema = MetricSchema {
    metric: "vault",
    labels: &["vault", "param", "address", "version"],
    experimental: false,
};

const STRATEGY_SCHEMA: MetricSchema = MetricSchema {
    metric: "strategy",
    labels: &["strategy", "param", "address", "version", "experimental"],
    experimental: true,
};

const ROUTER_GUARD_SCHEMA: MetricSchema = MetricSchema {
    metric: "router_guard",
    labels: &["vault", "param", "address", "version", "experimental"],
    experimental: true,
};

/// Schema for the strategies nested under a router guard instance. These
/// samples carry three leading labels (vault, strategy, flattened field path)
/// instead of two, so they get their own schema rather than reusing
/// [`ProductCategory::Strategy`]'s.
pub const NESTED_STRATEGY_SCHEMA: &MetricSchema = &MetricSchema {
    metric: "strategy",
    labels: &["vault", "strategy", "param", "address", "version", "experimental"],
    experimental: true,
};

/// The product categories a snapshot can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ProductCategory {
    Token,
    Pool,
    Router,
    Vault,
    Strategy,
    RouterGuard,
}

impl ProductCategory {
    /// Categories whose instances hold a flat-ish field set with no nested
    /// sub-collection. `RouterGuard` is handled separately because its
    /// instances also nest a `strategies` map.
    pub const SIMPLE: [Self; 5] = [Self::Token, Self::Pool, Self::Router, Self::Vault, Self::Strategy];

    /// The static metric name / label schema for this category.
    #[must_use]
    pub const fn schema(self) -> &'static MetricSchema {
        match self {
            Self::Token => &TOKEN_SCHEMA,
            Self::Pool => &POOL_SCHEMA,
            Self::Router => &ROUTER_SCHEMA,
            Self::Vault => &VAULT_SCHEMA,
            Self::Strategy => &STRATEGY_SCHEMA,
            Self::RouterGuard => &ROUTER_GUARD_SCHEMA,
        }
    }
}
