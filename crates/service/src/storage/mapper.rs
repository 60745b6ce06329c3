//! Row ⇄ record conversions for every table.
//!
//! Rows store `timestamptz` (`DateTime<FixedOffset>`); records use UTC.

use chrono::Utc;
use models::{comment, image, permission, post, role, user};
use sea_orm::Set;

use super::RowMapping;
use crate::domain::{Comment, Image, Permission, Post, Role, User};

impl RowMapping for image::Entity {
    type Record = Image;

    fn id_column() -> image::Column {
        image::Column::Id
    }

    fn to_record(row: image::Model) -> Image {
        Image {
            id: row.id,
            url: row.url,
            public_id: row.public_id,
            created_at: row.created_at.with_timezone(&Utc),
            updated_at: row.updated_at.with_timezone(&Utc),
        }
    }

    fn to_row(record: Image) -> image::ActiveModel {
        image::ActiveModel {
            id: Set(record.id),
            url: Set(record.url),
            public_id: Set(record.public_id),
            created_at: Set(record.created_at.into()),
            updated_at: Set(record.updated_at.into()),
        }
    }
}

impl RowMapping for user::Entity {
    type Record = User;

    fn id_column() -> user::Column {
        user::Column::Id
    }

    fn reference_column(field: &str) -> Option<user::Column> {
        match field {
            "image_id" => Some(user::Column::ImageId),
            _ => None,
        }
    }

    fn to_record(row: user::Model) -> User {
        User {
            id: row.id,
            email: row.email,
            password: row.password,
            name: row.name,
            birthday: row.birthday,
            link_social_media: row.link_social_media,
            bio: row.bio,
            image_id: row.image_id,
            created_at: row.created_at.with_timezone(&Utc),
            updated_at: row.updated_at.with_timezone(&Utc),
        }
    }

    fn to_row(record: User) -> user::ActiveModel {
        user::ActiveModel {
            id: Set(record.id),
            email: Set(record.email),
            password: Set(record.password),
            name: Set(record.name),
            birthday: Set(record.birthday),
            link_social_media: Set(record.link_social_media),
            bio: Set(record.bio),
            image_id: Set(record.image_id),
            created_at: Set(record.created_at.into()),
            updated_at: Set(record.updated_at.into()),
        }
    }
}

impl RowMapping for post::Entity {
    type Record = Post;

    fn id_column() -> post::Column {
        post::Column::Id
    }

    fn reference_column(field: &str) -> Option<post::Column> {
        match field {
            "user_id" => Some(post::Column::UserId),
            _ => None,
        }
    }

    fn to_record(row: post::Model) -> Post {
        Post {
            id: row.id,
            user_id: row.user_id,
            caption: row.caption,
            location: row.location,
            created_at: row.created_at.with_timezone(&Utc),
            updated_at: row.updated_at.with_timezone(&Utc),
        }
    }

    fn to_row(record: Post) -> post::ActiveModel {
        post::ActiveModel {
            id: Set(record.id),
            user_id: Set(record.user_id),
            caption: Set(record.caption),
            location: Set(record.location),
            created_at: Set(record.created_at.into()),
            updated_at: Set(record.updated_at.into()),
        }
    }
}

impl RowMapping for comment::Entity {
    type Record = Comment;

    fn id_column() -> comment::Column {
        comment::Column::Id
    }

    fn reference_column(field: &str) -> Option<comment::Column> {
        match field {
            "user_id" => Some(comment::Column::UserId),
            "post_id" => Some(comment::Column::PostId),
            _ => None,
        }
    }

    fn to_record(row: comment::Model) -> Comment {
        Comment {
            id: row.id,
            description: row.description,
            user_id: row.user_id,
            post_id: row.post_id,
            created_at: row.created_at.with_timezone(&Utc),
            updated_at: row.updated_at.with_timezone(&Utc),
        }
    }

    fn to_row(record: Comment) -> comment::ActiveModel {
        comment::ActiveModel {
            id: Set(record.id),
            description: Set(record.description),
            user_id: Set(record.user_id),
            post_id: Set(record.post_id),
            created_at: Set(record.created_at.into()),
            updated_at: Set(record.updated_at.into()),
        }
    }
}

impl RowMapping for role::Entity {
    type Record = Role;

    fn id_column() -> role::Column {
        role::Column::Id
    }

    fn to_record(row: role::Model) -> Role {
        Role {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at.with_timezone(&Utc),
            updated_at: row.updated_at.with_timezone(&Utc),
        }
    }

    fn to_row(record: Role) -> role::ActiveModel {
        role::ActiveModel {
            id: Set(record.id),
            name: Set(record.name),
            description: Set(record.description),
            created_at: Set(record.created_at.into()),
            updated_at: Set(record.updated_at.into()),
        }
    }
}

impl RowMapping for permission::Entity {
    type Record = Permission;

    fn id_column() -> permission::Column {
        permission::Column::Id
    }

    fn to_record(row: permission::Model) -> Permission {
        Permission {
            id: row.id,
            name: row.name,
            created_at: row.created_at.with_timezone(&Utc),
            updated_at: row.updated_at.with_timezone(&Utc),
        }
    }

    fn to_row(record: Permission) -> permission::ActiveModel {
        permission::ActiveModel {
            id: Set(record.id),
            name: Set(record.name),
            created_at: Set(record.created_at.into()),
            updated_at: Set(record.updated_at.into()),
        }
    }
}
