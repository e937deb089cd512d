pub(crate) mod chrome;
pub(crate) mod feed;
pub(crate) mod outlet;
pub(crate) mod scroll;
pub(crate) mod surfaces;
