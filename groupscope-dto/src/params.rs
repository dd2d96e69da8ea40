pub mod paging;

pub use paging::MemberListParams;
