mod common;

use caregiving_server::entities::{address, caregiver, job, job_application, member, prelude::*, user};
use caregiving_server::sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, PaginatorTrait, Set};
use chrono::NaiveDate;
use common::test_db;
use rust_decimal::Decimal;

fn user_row(user_id: i32) -> user::ActiveModel {
    user::ActiveModel {
        user_id: Set(user_id),
        email: Set(format!("u{user_id}@example.com")),
        given_name: Set("G".into()),
        surname: Set("S".into()),
        city: Set("C".into()),
        phone_number: Set("1".into()),
        profile_description: Set("d".into()),
        password_hash: Set("$argon2id$placeholder".into()),
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[tokio::test]
async fn relations_follow_foreign_keys() {
    let db = test_db().await;

    let owner = user_row(1).insert(&db).await.unwrap();
    user_row(2).insert(&db).await.unwrap();
    let household = member::ActiveModel {
        member_user_id: Set(1),
        house_rules: Set("quiet".into()),
    }
    .insert(&db)
    .await
    .unwrap();
    let carer = caregiver::ActiveModel {
        caregiver_user_id: Set(2),
        photo: Set("p".into()),
        gender: Set("f".into()),
        caregiving_type: Set("playmate".into()),
        hourly_rate: Set(Decimal::new(1050, 2)),
    }
    .insert(&db)
    .await
    .unwrap();
    address::ActiveModel {
        member_user_id: Set(1),
        house_number: Set("3".into()),
        street: Set("Main".into()),
        town: Set("Town".into()),
    }
    .insert(&db)
    .await
    .unwrap();
    for job_id in [1, 2] {
        job::ActiveModel {
            job_id: Set(job_id),
            member_user_id: Set(1),
            required_caregiving_type: Set("playmate".into()),
            other_requirements: Set("none".into()),
            date_posted: Set(day(job_id as u32)),
        }
        .insert(&db)
        .await
        .unwrap();
    }
    job_application::ActiveModel {
        caregiver_user_id: Set(2),
        job_id: Set(1),
        date_applied: Set(day(5)),
    }
    .insert(&db)
    .await
    .unwrap();

    let member_of_owner = owner.find_related(Member).one(&db).await.unwrap();
    assert_eq!(member_of_owner.as_ref(), Some(&household));
    assert!(owner.find_related(Caregiver).one(&db).await.unwrap().is_none());

    let jobs = household.find_related(Job).all(&db).await.unwrap();
    assert_eq!(jobs.len(), 2);
    let home = household.find_related(Address).one(&db).await.unwrap().unwrap();
    assert_eq!(home.street, "Main");

    let applications = carer.find_related(JobApplication).all(&db).await.unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].job_id, 1);

    // storage-level cascade: removing the member row empties its subtree
    household.delete(&db).await.unwrap();
    assert_eq!(Job::find().count(&db).await.unwrap(), 0);
    assert_eq!(Address::find().count(&db).await.unwrap(), 0);
    assert_eq!(JobApplication::find().count(&db).await.unwrap(), 0);
    assert_eq!(User::find().count(&db).await.unwrap(), 2);
}
