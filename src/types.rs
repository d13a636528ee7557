/// Name of the book/collection an item belongs to.
/// Example: `krvave_sonety`
pub type GroupName = String;
/// Name of a measured text unit (a poem file or a poem-chunk file).
/// Example: `sonet_01.txt`
pub type ItemName = String;
/// Entry path inside the dataset archive.
/// Example: `train/krvave_sonety/sonet_01.txt`
pub type ArchivePath = String;
