pub mod amenity_picker;
pub mod confirmation_modal;
pub mod fields;
pub mod generate_spaces_modal;
pub mod hours_editor;
pub mod layout;
pub mod location_form;
pub mod location_select;
pub mod modal;
pub mod pagination_controls;
pub mod rates_editor;
pub mod space_form;
pub mod space_type_form;
pub mod stat_card;
pub mod status_badge;
pub mod toast;

pub use amenity_picker::{AmenityList, AmenityPicker};
pub use confirmation_modal::ConfirmationModal;
pub use generate_spaces_modal::GenerateSpacesModal;
pub use hours_editor::HoursEditor;
pub use location_form::LocationFormModal;
pub use location_select::LocationSelect;
pub use modal::Modal;
pub use pagination_controls::PaginationControls;
pub use rates_editor::RatesEditor;
pub use space_form::SpaceFormModal;
pub use space_type_form::SpaceTypeFormModal;
pub use stat_card::{StatCard, StatGroup};
pub use status_badge::StatusBadge;
pub use toast::ToastContainer;
