//! Resource descriptions for every managed entity

use shared::ListShape;
use shared::models::{
    AccessLevel, Department, DirectoryDraft, MenuCategory, MenuCategoryDraft, MenuItem,
    MenuItemDraft, RestaurantTable, RestaurantTableDraft, Role, SpaCategory, SpaCategoryDraft,
    SpaService, SpaServiceDraft, SpaSpecialist, SpaSpecialistDraft, StaffMember, StaffMemberDraft,
};

use crate::access::Area;
use crate::error::ClientResult;
use crate::http::MultipartPayload;
use crate::images::ImageSet;
use crate::resource::{Payload, Resource};

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

fn money(value: f64) -> String {
    format!("{:.2}", value)
}

/// Pending uploads go out as file parts under `field`
fn attach_images(mut form: MultipartPayload, field: &str, images: &ImageSet) -> MultipartPayload {
    for image in images.pending() {
        form = form.file(field, &image.file_name, &image.mime, image.bytes.clone());
    }
    form
}

// ========== Restaurant ==========

impl Resource for MenuItem {
    type Draft = MenuItemDraft;

    const NAME: &'static str = "menu item";
    const ENDPOINT: &'static str = "/api/restaurant/menu-items";
    const LIST_SHAPE: ListShape = ListShape::Keyed("menuItems");
    const AREA: Area = Area::Restaurant;
    const COLUMNS: &'static [&'static str] =
        &["ID", "Name", "Category", "Price", "Prep (min)", "Available", "Images"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.category.clone(),
            money(self.price),
            self.prep_time.to_string(),
            yes_no(self.available),
            self.images.len().to_string(),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.ingredients.as_str(), self.category.as_str()]
    }

    fn status_key(&self) -> Option<&str> {
        Some(if self.available { "available" } else { "unavailable" })
    }

    fn to_draft(&self) -> MenuItemDraft {
        MenuItemDraft::from(self)
    }

    fn stored_images(&self) -> Vec<String> {
        self.images.clone()
    }

    fn encode(draft: &MenuItemDraft, images: &ImageSet) -> ClientResult<Payload> {
        let form = MultipartPayload::new()
            .text("name", &draft.name)
            .text("category", &draft.category)
            .text("price", draft.price)
            .text("prepTime", draft.prep_time)
            .text("ingredients", &draft.ingredients)
            .text("available", draft.available)
            .json("extras", &draft.extras)?
            .json("existingImages", images.existing())?;
        Ok(Payload::Multipart(attach_images(form, "images", images)))
    }
}

impl Resource for MenuCategory {
    type Draft = MenuCategoryDraft;

    const NAME: &'static str = "menu category";
    const ENDPOINT: &'static str = "/api/restaurant/menu-categories";
    const LIST_SHAPE: ListShape = ListShape::Keyed("categories");
    const AREA: Area = Area::Restaurant;
    const COLUMNS: &'static [&'static str] = &["ID", "Order", "Name", "Description", "Active"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.sort_order.to_string(),
            self.name.clone(),
            self.description.clone().unwrap_or_default(),
            yes_no(self.is_active),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(description) = &self.description {
            fields.push(description);
        }
        fields
    }

    fn status_key(&self) -> Option<&str> {
        Some(if self.is_active { "active" } else { "inactive" })
    }

    fn order(items: &mut [Self]) {
        items.sort_by_key(|c| c.sort_order);
    }

    fn prepare_create(draft: &mut MenuCategoryDraft, existing: &[Self]) {
        if draft.sort_order.is_none() {
            draft.sort_order = Some(MenuCategory::next_sort_order(existing));
        }
    }

    fn to_draft(&self) -> MenuCategoryDraft {
        MenuCategoryDraft::from(self)
    }
}

impl Resource for RestaurantTable {
    type Draft = RestaurantTableDraft;

    const NAME: &'static str = "table";
    const ENDPOINT: &'static str = "/api/restaurant/tables";
    const LIST_SHAPE: ListShape = ListShape::Keyed("tables");
    const AREA: Area = Area::Restaurant;
    const COLUMNS: &'static [&'static str] =
        &["ID", "Number", "Capacity", "Status", "Reservation", "Customer"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        format!("Table {}", self.number)
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.number.to_string(),
            self.capacity.to_string(),
            self.status.to_string(),
            self.reservation_time
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            self.customer_name.clone().unwrap_or_default(),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        self.customer_name.as_deref().into_iter().collect()
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn order(items: &mut [Self]) {
        items.sort_by_key(|t| t.number);
    }

    fn to_draft(&self) -> RestaurantTableDraft {
        RestaurantTableDraft::from(self)
    }
}

// ========== Spa ==========

impl Resource for SpaService {
    type Draft = SpaServiceDraft;

    const NAME: &'static str = "spa service";
    const ENDPOINT: &'static str = "/api/spa/services";
    const LIST_SHAPE: ListShape = ListShape::Keyed("services");
    const AREA: Area = Area::Spa;
    const COLUMNS: &'static [&'static str] =
        &["ID", "Title", "Category", "Specialist", "From", "Durations", "Status"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.category_id.clone(),
            self.specialist_id.clone(),
            self.starting_price().map(money).unwrap_or_default(),
            self.durations
                .iter()
                .map(|d| format!("{}m", d.duration))
                .collect::<Vec<_>>()
                .join("/"),
            self.display_status().as_str().to_string(),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.display_status().as_str())
    }

    fn to_draft(&self) -> SpaServiceDraft {
        SpaServiceDraft::from(self)
    }

    fn stored_images(&self) -> Vec<String> {
        self.images.clone()
    }

    fn encode(draft: &SpaServiceDraft, images: &ImageSet) -> ClientResult<Payload> {
        let form = MultipartPayload::new()
            .text("title", &draft.title)
            .text("description", &draft.description)
            .text("categoryId", &draft.category_id)
            .text("specialistId", &draft.specialist_id)
            .text("status", draft.status.to_backend().as_str())
            .json("durations", &draft.durations)?
            .json("addons", &draft.addons)?
            .json("existingImages", images.existing())?;
        Ok(Payload::Multipart(attach_images(form, "images", images)))
    }
}

impl Resource for SpaSpecialist {
    type Draft = SpaSpecialistDraft;

    const NAME: &'static str = "specialist";
    const ENDPOINT: &'static str = "/api/specialists";
    const LIST_SHAPE: ListShape = ListShape::Keyed("specialists");
    const AREA: Area = Area::Spa;
    const COLUMNS: &'static [&'static str] = &["ID", "Name", "Specializations", "Status"];
    const SINGLE_IMAGE: bool = true;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.full_name()
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.full_name(),
            self.specializations.join(", "),
            self.status.as_str().to_string(),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.first_name.as_str(), self.last_name.as_str(), self.bio.as_str()]
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn to_draft(&self) -> SpaSpecialistDraft {
        SpaSpecialistDraft::from(self)
    }

    fn stored_images(&self) -> Vec<String> {
        self.photo.clone().into_iter().collect()
    }

    fn encode(draft: &SpaSpecialistDraft, images: &ImageSet) -> ClientResult<Payload> {
        let mut form = MultipartPayload::new()
            .text("firstName", &draft.first_name)
            .text("lastName", &draft.last_name)
            .text("bio", &draft.bio)
            .text("status", draft.status.as_str())
            .json("specializations", &draft.specializations)?;
        if let Some(photo) = images.existing().first() {
            form = form.text("existingPhoto", photo);
        }
        Ok(Payload::Multipart(attach_images(form, "photo", images)))
    }
}

impl Resource for SpaCategory {
    type Draft = SpaCategoryDraft;

    const NAME: &'static str = "spa category";
    const ENDPOINT: &'static str = "/api/categories";
    const LIST_SHAPE: ListShape = ListShape::Keyed("categories");
    const AREA: Area = Area::Spa;
    const COLUMNS: &'static [&'static str] = &["ID", "Name", "Description", "Active"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.description.clone().unwrap_or_default(),
            yes_no(self.is_active),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        if let Some(description) = &self.description {
            fields.push(description);
        }
        fields
    }

    fn status_key(&self) -> Option<&str> {
        Some(if self.is_active { "active" } else { "inactive" })
    }

    fn to_draft(&self) -> SpaCategoryDraft {
        SpaCategoryDraft::from(self)
    }
}

// ========== Staff ==========

impl Resource for StaffMember {
    type Draft = StaffMemberDraft;

    const NAME: &'static str = "staff member";
    const ENDPOINT: &'static str = "/api/staff";
    const LIST_SHAPE: ListShape = ListShape::Keyed("staff");
    const AREA: Area = Area::Staff;
    const COLUMNS: &'static [&'static str] =
        &["ID", "Name", "Position", "Department", "Role", "Access", "Status", "Active"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.position.clone(),
            self.department.clone(),
            self.role.clone(),
            self.access_level.clone(),
            self.status.clone(),
            yes_no(self.active),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.position.as_str(), self.department.as_str(), self.role.as_str()]
    }

    fn status_key(&self) -> Option<&str> {
        Some(if self.active { "active" } else { "inactive" })
    }

    fn to_draft(&self) -> StaffMemberDraft {
        StaffMemberDraft::from(self)
    }
}

fn directory_row(id: &str, name: &str, description: &Option<String>) -> Vec<String> {
    vec![
        id.to_string(),
        name.to_string(),
        description.clone().unwrap_or_default(),
    ]
}

fn directory_draft(name: &str, description: &Option<String>) -> DirectoryDraft {
    DirectoryDraft {
        name: name.to_string(),
        description: description.clone(),
    }
}

impl Resource for Department {
    type Draft = DirectoryDraft;

    const NAME: &'static str = "department";
    const ENDPOINT: &'static str = "/api/departments";
    const LIST_SHAPE: ListShape = ListShape::Bare;
    const AREA: Area = Area::Staff;
    const COLUMNS: &'static [&'static str] = &["ID", "Name", "Description"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn row(&self) -> Vec<String> {
        directory_row(&self.id, &self.name, &self.description)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn to_draft(&self) -> DirectoryDraft {
        directory_draft(&self.name, &self.description)
    }
}

impl Resource for Role {
    type Draft = DirectoryDraft;

    const NAME: &'static str = "role";
    const ENDPOINT: &'static str = "/api/roles";
    const LIST_SHAPE: ListShape = ListShape::Bare;
    const AREA: Area = Area::Staff;
    const COLUMNS: &'static [&'static str] = &["ID", "Name", "Description"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn row(&self) -> Vec<String> {
        directory_row(&self.id, &self.name, &self.description)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn to_draft(&self) -> DirectoryDraft {
        directory_draft(&self.name, &self.description)
    }
}

impl Resource for AccessLevel {
    type Draft = DirectoryDraft;

    const NAME: &'static str = "access level";
    const ENDPOINT: &'static str = "/api/access-levels";
    const LIST_SHAPE: ListShape = ListShape::Bare;
    const AREA: Area = Area::Staff;
    const COLUMNS: &'static [&'static str] = &["ID", "Name", "Description"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn row(&self) -> Vec<String> {
        directory_row(&self.id, &self.name, &self.description)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn to_draft(&self) -> DirectoryDraft {
        directory_draft(&self.name, &self.description)
    }
}
