use sea_orm_migration::prelude::*;
use sea_orm_migration::prelude::extension::postgres::Type;

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Nama,
    Email,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Layanan {
    Table,
    Id,
    NamaLayanan,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Mitra {
    Table,
    Id,
    NamaToko,
    Email,
    PasswordHash,
    Alamat,
    PhoneNumber,
    Description,
    Status,
    Saldo,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tagihan {
    Table,
    Id,
    UserId,
    LayananId,
    MitraId,
    Nominal,
    Status,
    OrderDate,
    CompletionDate,
    WorkStartedAt,
    WorkDurationSeconds,
    Rating,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Topup {
    Table,
    Id,
    MitraId,
    Nominal,
    PaymentMethod,
    Status,
    TransactionCode,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Chat {
    Table,
    Id,
    SenderId,
    SenderType,
    ReceiverId,
    ReceiverType,
    Message,
    ReadBySender,
    ReadByReceiver,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Postgres ENUM types
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("mitra_status"))
                    .values(vec![
                        Alias::new("pending"),
                        Alias::new("terverifikasi"),
                        Alias::new("ditolak"),
                    ])
                    .to_owned(),
            )
            .await?;

        // The last four values are legacy rows kept for history display only
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("tagihan_status"))
                    .values(vec![
                        Alias::new("pending"),
                        Alias::new("diterima"),
                        Alias::new("sedang_dikerjakan"),
                        Alias::new("selesai"),
                        Alias::new("completed"),
                        Alias::new("success"),
                        Alias::new("failed"),
                        Alias::new("cancelled"),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("topup_status"))
                    .values(vec![
                        Alias::new("pending"),
                        Alias::new("success"),
                        Alias::new("completed"),
                        Alias::new("failed"),
                        Alias::new("cancelled"),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("payment_method"))
                    .values(vec![
                        Alias::new("bank_transfer"),
                        Alias::new("e_wallet"),
                        Alias::new("virtual_account"),
                        Alias::new("credit_card"),
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new("chat_party"))
                    .values(vec![Alias::new("mitra"), Alias::new("admin")])
                    .to_owned(),
            )
            .await?;

        // users: requester accounts, maintained by the consumer side
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Nama).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // layanan: service catalog, seeded by the next migration
        manager
            .create_table(
                Table::create()
                    .table(Layanan::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Layanan::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Layanan::NamaLayanan)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Layanan::Description).text().null())
                    .col(
                        ColumnDef::new(Layanan::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Mitra::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Mitra::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Mitra::NamaToko).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Mitra::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Mitra::PasswordHash).string_len(255).not_null())
                    .col(ColumnDef::new(Mitra::Alamat).text().not_null())
                    .col(ColumnDef::new(Mitra::PhoneNumber).string_len(32).not_null())
                    .col(ColumnDef::new(Mitra::Description).text().null())
                    .col(
                        ColumnDef::new(Mitra::Status)
                            .custom(Alias::new("mitra_status"))
                            .not_null()
                            .default(Expr::cust("'pending'::mitra_status")),
                    )
                    .col(
                        ColumnDef::new(Mitra::Saldo)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Mitra::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Mitra::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tagihan::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tagihan::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tagihan::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Tagihan::LayananId).big_integer().not_null())
                    .col(ColumnDef::new(Tagihan::MitraId).big_integer().null())
                    .col(ColumnDef::new(Tagihan::Nominal).big_integer().not_null())
                    .col(
                        ColumnDef::new(Tagihan::Status)
                            .custom(Alias::new("tagihan_status"))
                            .not_null()
                            .default(Expr::cust("'pending'::tagihan_status")),
                    )
                    .col(
                        ColumnDef::new(Tagihan::OrderDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .col(
                        ColumnDef::new(Tagihan::CompletionDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Tagihan::WorkStartedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Tagihan::WorkDurationSeconds)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Tagihan::Rating).integer().null())
                    .col(
                        ColumnDef::new(Tagihan::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Tagihan::UpdatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // incoming feed filters on (status, mitra_id); history filters on mitra_id
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tagihan_status")
                    .table(Tagihan::Table)
                    .col(Tagihan::Status)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tagihan_mitra_id")
                    .table(Tagihan::Table)
                    .col(Tagihan::MitraId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tagihan_user_id")
                    .table(Tagihan::Table)
                    .col(Tagihan::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Tagihan::Table)
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk_tagihan_user")
                            .from_tbl(Tagihan::Table)
                            .from_col(Tagihan::UserId)
                            .to_tbl(Users::Table)
                            .to_col(Users::Id),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Tagihan::Table)
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk_tagihan_layanan")
                            .from_tbl(Tagihan::Table)
                            .from_col(Tagihan::LayananId)
                            .to_tbl(Layanan::Table)
                            .to_col(Layanan::Id),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Tagihan::Table)
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk_tagihan_mitra")
                            .from_tbl(Tagihan::Table)
                            .from_col(Tagihan::MitraId)
                            .to_tbl(Mitra::Table)
                            .to_col(Mitra::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Topup::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Topup::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Topup::MitraId).big_integer().not_null())
                    .col(ColumnDef::new(Topup::Nominal).big_integer().not_null())
                    .col(
                        ColumnDef::new(Topup::PaymentMethod)
                            .custom(Alias::new("payment_method"))
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Topup::Status)
                            .custom(Alias::new("topup_status"))
                            .not_null()
                            .default(Expr::cust("'pending'::topup_status")),
                    )
                    .col(
                        ColumnDef::new(Topup::TransactionCode)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Topup::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_topup_mitra_id")
                    .table(Topup::Table)
                    .col(Topup::MitraId)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Topup::Table)
                    .add_foreign_key(
                        TableForeignKey::new()
                            .name("fk_topup_mitra")
                            .from_tbl(Topup::Table)
                            .from_col(Topup::MitraId)
                            .to_tbl(Mitra::Table)
                            .to_col(Mitra::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // chat endpoints address parties by email or the literal "admin",
        // so sender_id/receiver_id stay textual rather than FK columns
        manager
            .create_table(
                Table::create()
                    .table(Chat::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Chat::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Chat::SenderId).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Chat::SenderType)
                            .custom(Alias::new("chat_party"))
                            .not_null(),
                    )
                    .col(ColumnDef::new(Chat::ReceiverId).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Chat::ReceiverType)
                            .custom(Alias::new("chat_party"))
                            .not_null(),
                    )
                    .col(ColumnDef::new(Chat::Message).text().not_null())
                    .col(
                        ColumnDef::new(Chat::ReadBySender)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Chat::ReadByReceiver)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Chat::CreatedAt)
                            .timestamp_with_time_zone()
                            .default(Expr::cust("NOW()"))
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_chat_receiver_id")
                    .table(Chat::Table)
                    .col(Chat::ReceiverId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_chat_sender_id")
                    .table(Chat::Table)
                    .col(Chat::SenderId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // child tables first
        manager
            .drop_table(Table::drop().if_exists().table(Chat::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Topup::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Tagihan::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Mitra::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Layanan::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().if_exists().table(Users::Table).to_owned())
            .await?;

        for name in [
            "chat_party",
            "payment_method",
            "topup_status",
            "tagihan_status",
            "mitra_status",
        ] {
            manager
                .drop_type(Type::drop().name(Alias::new(name)).to_owned())
                .await?;
        }

        Ok(())
    }
}
