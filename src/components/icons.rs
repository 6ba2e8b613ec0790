//! Centralized icon definitions.
//!
//! Maps semantic icon names to Bootstrap icons so views never reference
//! a concrete icon set directly.

use icondata::Icon;

pub const HOME: Icon = icondata::BsHouse;
pub const DOCUMENT: Icon = icondata::BsFileEarmarkText;
pub const CALENDAR: Icon = icondata::BsCalendar3;
pub const CHART: Icon = icondata::BsBarChart;
pub const TRASH: Icon = icondata::BsTrash3;
pub const LOGOUT: Icon = icondata::BsBoxArrowRight;

pub const FOLDER: Icon = icondata::BsFolderFill;
pub const FOLDER_PLUS: Icon = icondata::BsFolderPlus;
pub const FILE: Icon = icondata::BsFileEarmark;
pub const UPLOAD: Icon = icondata::BsUpload;
pub const DOWNLOAD: Icon = icondata::BsDownload;
pub const RESTORE: Icon = icondata::BsArrowCounterclockwise;
pub const SEARCH: Icon = icondata::BsSearch;
pub const CLOSE: Icon = icondata::BsXLg;
pub const PLUS: Icon = icondata::BsPlusLg;
pub const BACK: Icon = icondata::BsArrowLeft;
pub const CHEVRON_LEFT: Icon = icondata::BsChevronLeft;
pub const CHEVRON_RIGHT: Icon = icondata::BsChevronRight;
pub const USER: Icon = icondata::BsPerson;
pub const BELL: Icon = icondata::BsBell;
