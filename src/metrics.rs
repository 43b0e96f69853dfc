use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};

use crate::entities::prelude::*;

#[derive(Clone, Copy, Debug)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    fn as_str(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

pub fn record_operation(entity: &'static str, operation: Operation) {
    metrics::counter!(
        "caregiving_entity_operations_total",
        "entity" => entity,
        "operation" => operation.as_str()
    )
    .increment(1);

    if let Operation::Create = operation {
        metrics::gauge!("caregiving_rows", "entity" => entity).increment(1.0);
    }
}

/// A delete can cascade into other tables, so every row gauge is recounted
/// rather than decremented.
pub async fn record_delete(db: &DatabaseConnection, entity: &'static str) {
    record_operation(entity, Operation::Delete);
    if let Err(e) = refresh_row_gauges(db).await {
        tracing::warn!(error = %e, entity, "could not refresh row metrics");
    }
}

/// Sets each `caregiving_rows` gauge to its table's current size.
pub async fn refresh_row_gauges(db: &DatabaseConnection) -> Result<[(&'static str, u64); 7], DbErr> {
    let counts = [
        ("user", User::find().count(db).await?),
        ("member", Member::find().count(db).await?),
        ("caregiver", Caregiver::find().count(db).await?),
        ("address", Address::find().count(db).await?),
        ("appointment", Appointment::find().count(db).await?),
        ("job", Job::find().count(db).await?),
        ("job_application", JobApplication::find().count(db).await?),
    ];

    for (entity, count) in counts {
        metrics::gauge!("caregiving_rows", "entity" => entity).set(count as f64);
    }
    Ok(counts)
}

pub async fn init_metrics(db: &DatabaseConnection) -> Result<(), DbErr> {
    let counts = refresh_row_gauges(db).await?;

    tracing::info!(
        users = counts[0].1,
        members = counts[1].1,
        caregivers = counts[2].1,
        jobs = counts[5].1,
        "Initialized row metrics"
    );
    Ok(())
}
