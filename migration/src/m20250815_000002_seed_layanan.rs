use sea_orm::{ConnectionTrait, Statement};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Service catalog rows. Orders reference these for display;
        // catalog management itself lives outside this service.
        let conn = manager.get_connection();
        let insert_sql = r#"
INSERT INTO layanan (nama_layanan, description)
VALUES
 ('Service AC', 'Perawatan dan perbaikan AC rumah tangga'),
 ('Cuci AC', 'Pembersihan unit indoor dan outdoor'),
 ('Service Kulkas', 'Perbaikan kulkas satu dan dua pintu'),
 ('Service Mesin Cuci', 'Perbaikan mesin cuci top loading dan front loading'),
 ('Instalasi Listrik', 'Pemasangan dan perbaikan instalasi listrik rumah'),
 ('Service TV', 'Perbaikan TV LED dan Smart TV')
ON CONFLICT (nama_layanan) DO NOTHING;
"#;
        conn.execute(Statement::from_string(
            manager.get_database_backend(),
            insert_sql.to_string(),
        ))
        .await?;

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Ok(())
    }
}
