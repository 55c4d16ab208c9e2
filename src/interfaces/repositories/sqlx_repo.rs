use sqlx::SqlitePool;

/// One repository struct per entity, all sharing the same pool. The trait
/// impls live next to their traits in this module's siblings.
#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxContactMessageRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxSocialLinksRepo {
    pub pool: SqlitePool,
}
