mod quiz;

use dotenv::dotenv;
use quiz::java_basics::JavaBasicsQuiz;

fn main() {
    dotenv().ok();

    pretty_env_logger::init();
    log::info!("Starting the quiz preview...");

    println!("Building the Java basics quiz...");
    let quiz_source = JavaBasicsQuiz::new().expect("Failed to build the Java basics quiz");
    println!("Quiz built");

    print_quiz(quiz_source.get_quiz());
}

fn print_quiz(quiz: &quiz::Quiz) {
    for (number, question) in quiz.questions.iter().enumerate() {
        log::debug!("Rendering question {}", number + 1);
        println!("\nQuestão {}: {}", number + 1, question.text);
        for alternative in &question.alternatives {
            println!("  - {}", alternative.text);
        }
        if let Some(correct) = question.correct_alternative() {
            println!("  Resposta correta: {}", correct.text);
        }
    }
}
