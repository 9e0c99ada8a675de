pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8 py-8";
pub const CONTAINER_LG: &str = "max-w-6xl mx-auto grid grid-cols-1 lg:grid-cols-[minmax(0,1fr)_22rem] gap-8";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-2xl shadow-xl dark:shadow-[0_8px_30px_-12px_rgba(255,255,255,0.1)] p-6 sm:p-8 border border-gray-100 dark:border-gray-700";
pub const PANEL: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const PANEL_TITLE: &str = "text-lg font-semibold text-gray-900 dark:text-white";
pub const BADGE: &str = "ml-1 inline-flex items-center justify-center min-w-[1.5rem] px-2 rounded-full text-xs font-bold bg-blue-100 text-blue-700 dark:bg-blue-900 dark:text-blue-200";

pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-3 py-1 rounded-lg text-sm font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-700 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_ICON: &str = "p-1 text-lg leading-none text-gray-500 dark:text-gray-400 hover:text-red-600 dark:hover:text-red-400 rounded transition-colors duration-200 disabled:opacity-40";
pub const INPUT: &str = "block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600 disabled:opacity-60";
pub const NAME_INPUT: &str = "w-full bg-transparent text-center text-3xl font-bold text-gray-900 dark:text-white border-b border-transparent hover:border-gray-300 dark:hover:border-gray-600 focus:border-blue-500 focus:outline-none mb-6";

pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "mt-2 text-sm text-red-500 dark:text-red-400";

pub const WHEEL_FRAME: &str = "relative mx-auto w-full max-w-[450px] aspect-square rounded-full p-2 bg-gradient-to-br from-slate-700 to-slate-900 shadow-[0_0_40px_-10px_rgba(59,130,246,0.5)] transition-shadow duration-500";
pub const WHEEL_FRAME_SPINNING: &str = "shadow-[0_0_50px_-8px_rgba(130,100,255,0.7)]";
pub const WHEEL_FRAME_CELEBRATING: &str = "ring-4 ring-amber-400 shadow-[0_0_60px_0_rgba(251,191,36,0.8)] animate-pulse";
pub const WHEEL_POINTER: &str = "absolute left-1/2 -top-2 z-10 w-0 h-0 -translate-x-1/2 origin-top border-l-[14px] border-r-[14px] border-t-[28px] border-l-transparent border-r-transparent border-t-amber-400 drop-shadow-lg transition-transform duration-75";
pub const WHEEL_POINTER_NUDGED: &str = "-rotate-12";

pub const SPIN_BUTTON: &str = "w-full max-w-[300px] py-4 px-8 rounded-full text-lg font-bold tracking-widest text-white bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 shadow-lg transform hover:scale-105 transition-all duration-300";
pub const SPIN_BUTTON_DISABLED: &str = "opacity-60 cursor-not-allowed hover:scale-100";

pub const RESULT_CARD: &str = "mt-8 mx-auto max-w-md text-center px-6 py-4 rounded-xl border-2 border-gray-200 dark:border-gray-700 transition-all duration-500";
pub const RESULT_CARD_WIN: &str = "border-amber-300 bg-gradient-to-r from-amber-50 to-orange-50 dark:from-amber-900/30 dark:to-orange-900/30 shadow-lg";
pub const RESULT_HEADING: &str = "text-sm font-medium text-gray-600 dark:text-gray-300";
pub const RESULT_VALUE: &str = "mt-1 text-2xl font-bold text-gray-900 dark:text-white break-words";

pub const OPTION_LIST: &str = "mt-4 space-y-2 max-h-80 overflow-y-auto";
pub const OPTION_ITEM: &str = "flex items-center gap-3 px-3 py-2 rounded-lg bg-gray-50 dark:bg-gray-700/40 text-gray-900 dark:text-white";
pub const OPTION_DOT: &str = "w-3 h-3 rounded-full flex-shrink-0 shadow-[0_0_8px_currentColor]";
pub const HISTORY_LIST: &str = "space-y-2 max-h-72 overflow-y-auto";
pub const HISTORY_ITEM: &str = "flex items-center justify-between px-3 py-2 rounded-lg bg-gray-50 dark:bg-gray-700/40 text-gray-900 dark:text-white";
