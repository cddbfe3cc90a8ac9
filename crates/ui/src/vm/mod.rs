mod lesson_vm;

pub use lesson_vm::{
    LearnCardVm, LessonHeaderVm, LessonScreenVm, PracticeCardVm, ReviewCardVm,
};
