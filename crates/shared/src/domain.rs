use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ItemId);

/// One `(item, quantity)` pair of a bon or a prescription, after the raw
/// form values have been parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_id: ItemId,
    pub qty: i64,
}

impl LineItem {
    pub fn new(item_id: i64, qty: i64) -> Self {
        Self {
            item_id: ItemId(item_id),
            qty,
        }
    }
}
