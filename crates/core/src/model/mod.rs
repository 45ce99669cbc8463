mod answer;
mod assets;
mod ids;
mod phase;
mod pool;
mod question;
mod response;

pub use answer::{ParseAnswerError, PreservationJudgment, Side};
pub use assets::{AssetLayout, AssetSlot, DEFAULT_ASSET_ROOT};
pub use ids::{ItemId, ParseIdError};
pub use phase::Phase;
pub use pool::{ItemPool, ItemPoolError};
pub use question::{ComparisonQuestion, PreservationQuestion};
pub use response::{ComparisonResponse, PreservationResponse};
