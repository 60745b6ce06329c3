use criterion::{criterion_group, criterion_main, Criterion};

use service::domain::{NewUser, UserPatch};
use service::AppServices;

fn bench_user_crud(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let app = AppServices::in_memory();

    // one long-lived record for the read/update paths
    let user = rt
        .block_on(app.users.create(NewUser { email: "bench@example.com".into(), password: "pw".into(), ..Default::default() }))
        .unwrap();

    c.bench_function("user_get_by_id", |b| {
        b.iter(|| rt.block_on(app.users.get_by_id(&user.id)).unwrap());
    });

    c.bench_function("user_update_name", |b| {
        b.iter(|| {
            let patch = UserPatch { name: Some(Some("Bench".into())), ..Default::default() };
            rt.block_on(app.users.update(&user.id, patch)).unwrap()
        });
    });

    c.bench_function("user_create_delete", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            let draft = NewUser { email: format!("bench{i}@example.com"), password: "pw".into(), ..Default::default() };
            let created = rt.block_on(app.users.create(draft)).unwrap();
            rt.block_on(app.users.delete(&created.id)).unwrap();
        });
    });
}

criterion_group!(benches, bench_user_crud);
criterion_main!(benches);
