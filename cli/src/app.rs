use std::io::{self, BufRead, Write};

use taskprompt_core::{
    sort_by_title, RawNewTask, RawTaskUpdate, Status, Task, TaskError, TaskRepository, TaskService,
    TaskView,
};
use tracing::debug;
use uuid::Uuid;

use crate::console::Console;
use crate::render;

const INVALID_OPTION: &str = "Opción inválida. Intente nuevamente.";
const PRESS_ENTER: &str = "Presiona Enter para continuar...";
const SAVED: &str = "\n¡Datos guardados!";

const STATUS_PROMPT: &str = "([P]endiente/[E]n curso/[T]erminada/[C]ancelada)";
const DIFFICULTY_PROMPT: &str = "([1]/[2]/[3])";
const KEEP_HINT: &str =
    " - Si deseas mantener los valores de un atributo simplemente dejalo en blanco";
const DUE_PROMPT: &str = "(YYYY-MM-DD o DD/MM/YYYY opcional HH:mm)";

/// Menu state machine. Each screen is a loop that returns to its caller on `0`.
pub struct App<R, W, T: TaskRepository> {
    console: Console<R, W>,
    service: TaskService<T>,
    user: String,
    colored: bool,
}

impl<R: BufRead, W: Write, T: TaskRepository> App<R, W, T> {
    pub fn new(
        console: Console<R, W>,
        service: TaskService<T>,
        user: String,
        colored: bool,
    ) -> Self {
        Self {
            console,
            service,
            user,
            colored,
        }
    }

    /// Runs until the user picks `0` on the main menu or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        match self.main_menu() {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("input closed");
            }
            other => other?,
        }
        self.console.say("¡Hasta luego!")
    }

    #[cfg(test)]
    pub fn service(&self) -> &TaskService<T> {
        &self.service
    }

    #[cfg(test)]
    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    fn main_menu(&mut self) -> io::Result<()> {
        loop {
            self.console.clear()?;
            self.console.say(&format!("¡Hola {}!\n", self.user))?;
            self.console.say("¿Qué desea hacer?\n")?;
            self.console.say("[1] Ver mis tareas")?;
            self.console.say("[2] Buscar una tarea")?;
            self.console.say("[3] Agregar una tarea")?;
            self.console.say("[0] Salir\n")?;

            match self.console.ask("> ")?.trim() {
                "1" => self.view_menu()?,
                "2" => self.search_screen()?,
                "3" => self.add_screen()?,
                "0" => return Ok(()),
                _ => self.pause(INVALID_OPTION)?,
            }
        }
    }

    fn view_menu(&mut self) -> io::Result<()> {
        loop {
            self.console.clear()?;
            self.console.say("¿Qué tarea desea ver?\n")?;
            self.console.say("[1] Todas")?;
            self.console.say("[2] Pendientes")?;
            self.console.say("[3] En curso")?;
            self.console.say("[4] Terminadas")?;
            self.console.say("[0] Volver\n")?;

            let (ids, heading) = match self.console.ask("> ")?.trim() {
                "1" => (sorted_ids(self.service.list_all()), "Todas tus tareas"),
                "2" => (self.ids_with_status(Status::Pending), "Tareas Pendientes"),
                "3" => (self.ids_with_status(Status::InProgress), "Tareas En curso"),
                "4" => (self.ids_with_status(Status::Done), "Tareas Terminadas"),
                "0" => return Ok(()),
                _ => {
                    self.pause(INVALID_OPTION)?;
                    continue;
                }
            };
            self.list_screen(&ids, heading)?;
        }
    }

    fn ids_with_status(&self, status: Status) -> Vec<Uuid> {
        sorted_ids(self.service.list_by_status(status))
    }

    fn list_screen(&mut self, ids: &[Uuid], heading: &str) -> io::Result<()> {
        loop {
            self.console.clear()?;
            self.console.say(&format!("{heading}.\n"))?;
            if ids.is_empty() {
                self.console.say("(No hay tareas para mostrar)\n")?;
                return self.pause("Presiona Enter para volver...");
            }

            let table = {
                let tasks: Vec<&Task> = ids.iter().filter_map(|id| self.service.get(id)).collect();
                render::task_table(&tasks, self.colored)
            };
            self.console.say(&table)?;
            self.console.say("\n¿Deseas ver los detalles de alguna?")?;
            self.console.say("Introduce el número para verla o 0 para volver.")?;

            let choice = self.console.ask("> ")?;
            let choice = choice.trim();
            if choice == "0" {
                return Ok(());
            }
            match choice.parse::<usize>() {
                Ok(n) if (1..=ids.len()).contains(&n) => self.details_screen(ids[n - 1])?,
                _ => self.pause(INVALID_OPTION)?,
            }
        }
    }

    fn details_screen(&mut self, id: Uuid) -> io::Result<()> {
        loop {
            let Some(task) = self.service.get(&id) else {
                return Ok(());
            };
            let view = TaskView::from_entity(task);

            self.console.clear()?;
            self.console.say("Esta es la tarea que elegiste.\n")?;
            self.console.say(&render::task_details(&view))?;
            self.console.say("Si deseas editarla selecciona E, si no 0 para volver")?;

            match self.console.ask("> ")?.trim().to_uppercase().as_str() {
                "0" => return Ok(()),
                "E" => self.edit_screen(id, &view.title)?,
                _ => self.pause(INVALID_OPTION)?,
            }
        }
    }

    fn edit_screen(&mut self, id: Uuid, title: &str) -> io::Result<()> {
        loop {
            self.console.clear()?;
            self.console.say(&format!("Estas editando la tarea: {title}"))?;
            self.console.say(KEEP_HINT)?;
            self.console
                .say(" - Si deseas dejar en blanco un atributo, escribe un espacio\n")?;

            let update = RawTaskUpdate {
                description: Some(self.console.ask("1. Ingresa la descripción: ")?),
                status: Some(self.console.ask(&format!("2. Estado{STATUS_PROMPT}: "))?),
                difficulty: Some(self.console.ask(&format!("3. Dificultad{DIFFICULTY_PROMPT}: "))?),
                due_at: Some(self.console.ask(&format!("4. Vencimiento {DUE_PROMPT}: "))?),
            };

            match self.service.update_task(&id, &update) {
                Ok(()) => {
                    self.console.say(SAVED)?;
                    return self.pause(PRESS_ENTER);
                }
                Err(e) => {
                    if !self.offer_retry(&e)? {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn search_screen(&mut self) -> io::Result<()> {
        loop {
            self.console.clear()?;
            self.console.say("Introduce el título de una tarea para buscarla")?;
            let query = self.console.ask("> ")?;
            let query = query.trim();
            if query.is_empty() {
                let back = self.console.ask("Búsqueda vacía. ¿Volver? (S/N): ")?;
                if back.trim().eq_ignore_ascii_case("S") {
                    return Ok(());
                }
                continue;
            }

            let ids = sorted_ids(self.service.search(query));
            if ids.is_empty() {
                self.console.say("\nNo hay tareas relacionadas con la búsqueda.\n")?;
                return self.pause(PRESS_ENTER);
            }
            return self.list_screen(&ids, "Estas son las tareas relacionadas");
        }
    }

    fn add_screen(&mut self) -> io::Result<()> {
        loop {
            self.console.clear()?;
            self.console.say("Estas creando una nueva tarea.\n")?;

            let raw = RawNewTask {
                title: self.console.ask("1. Ingresa el título: ")?,
                description: Some(self.console.ask("2. Ingresa la descripción: ")?),
                status: Some(
                    self.console
                        .ask(&format!("3. Estado {STATUS_PROMPT} [Enter para P]: "))?,
                ),
                difficulty: Some(
                    self.console
                        .ask(&format!("4. Dificultad {DIFFICULTY_PROMPT} [Enter para 1]: "))?,
                ),
                due_at: Some(
                    self.console
                        .ask(&format!("5. Vencimiento {DUE_PROMPT} [opcional]: "))?,
                ),
            };

            match self.service.create_task(&raw) {
                Ok(_) => {
                    self.console.say(SAVED)?;
                    return self.pause(PRESS_ENTER);
                }
                Err(e) => {
                    if !self.offer_retry(&e)? {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn offer_retry(&mut self, err: &TaskError) -> io::Result<bool> {
        self.console.say(&format!("\nError: {}", error_message(err)))?;
        let answer = self.console.ask("¿Deseas reintentar? (S/N): ")?;
        Ok(answer.trim().eq_ignore_ascii_case("S"))
    }

    fn pause(&mut self, message: &str) -> io::Result<()> {
        self.console.ask(&format!("\n{message}")).map(drop)
    }
}

fn sorted_ids(mut tasks: Vec<&Task>) -> Vec<Uuid> {
    sort_by_title(&mut tasks);
    tasks.into_iter().map(Task::id).collect()
}

fn error_message(err: &TaskError) -> String {
    match err {
        TaskError::Validation(v) => v.hint().to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskprompt_core::{seed_demo, Difficulty, InMemoryTaskRepository, NO_DATA};

    type TestApp<'a> = App<&'a [u8], Vec<u8>, InMemoryTaskRepository>;

    fn app(script: &str, demo: bool) -> TestApp<'_> {
        let mut service = TaskService::new(InMemoryTaskRepository::new());
        if demo {
            seed_demo(&mut service).unwrap();
        }
        let console = Console::new(script.as_bytes(), Vec::new(), false);
        App::new(console, service, "Ana".to_string(), false)
    }

    fn output(app: &TestApp<'_>) -> String {
        String::from_utf8_lossy(app.console().output()).into_owned()
    }

    fn find<'a>(app: &'a TestApp<'_>, title: &str) -> &'a Task {
        app.service()
            .list_all()
            .into_iter()
            .find(|t| t.title() == title)
            .unwrap()
    }

    #[test]
    fn test_exit_from_main_menu() {
        let mut app = app("0\n", true);
        app.run().unwrap();
        let out = output(&app);
        assert!(out.contains("¡Hola Ana!"));
        assert!(out.ends_with("¡Hasta luego!\n"));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let mut app = app("1\n", true);
        app.run().unwrap();
        assert!(output(&app).ends_with("¡Hasta luego!\n"));
    }

    #[test]
    fn test_invalid_choice_is_reported() {
        let mut app = app("9\n\n0\n", false);
        app.run().unwrap();
        assert!(output(&app).contains(INVALID_OPTION));
    }

    #[test]
    fn test_add_task_with_defaults() {
        let mut app = app("3\nLavar el auto\n\n\n\n\n\n0\n", false);
        app.run().unwrap();
        let task = find(&app, "Lavar el auto");
        assert_eq!(task.status(), Status::Pending);
        assert_eq!(task.difficulty(), Difficulty::Easy);
        assert_eq!(task.description(), None);
        assert!(output(&app).contains("¡Datos guardados!"));
    }

    #[test]
    fn test_add_task_error_then_retry() {
        // Empty title, retry, then a valid task.
        let script = "3\n\n\n\n\n\nS\nRegar plantas\nCon poca agua\nE\n2\n2025-12-01 18:00\n\n0\n";
        let mut app = app(script, false);
        app.run().unwrap();
        assert!(output(&app).contains("Error: Título inválido"));
        let task = find(&app, "Regar plantas");
        assert_eq!(task.status(), Status::InProgress);
        assert_eq!(task.difficulty(), Difficulty::Medium);
        assert_eq!(task.description(), Some("Con poca agua"));
    }

    #[test]
    fn test_add_task_error_without_retry_stores_nothing() {
        let mut app = app("3\nTitulo\n\nX\n\n\nN\n0\n", false);
        app.run().unwrap();
        assert!(output(&app).contains("Error: Estado inválido"));
        assert!(app.service().list_all().is_empty());
    }

    #[test]
    fn test_list_all_is_sorted_by_title() {
        let mut app = app("1\n1\n0\n0\n0\n", true);
        app.run().unwrap();
        let out = output(&app);
        let comprar = out.find("Comprar Huevos").unwrap();
        let pasear = out.find("Pasear al perro").unwrap();
        let terminar = out.find("Terminar práctico de BD").unwrap();
        assert!(comprar < pasear && pasear < terminar);
    }

    #[test]
    fn test_empty_filter_shows_placeholder() {
        let mut app = app("1\n2\n\n0\n0\n", false);
        app.run().unwrap();
        assert!(output(&app).contains("(No hay tareas para mostrar)"));
    }

    #[test]
    fn test_edit_clears_fields_with_single_space() {
        // View all, open [2] (Pasear al perro), edit: clear description and due date.
        let script = "1\n1\n2\nE\n \n\n\n \n\n0\n0\n0\n0\n";
        let mut app = app(script, true);
        app.run().unwrap();
        let task = find(&app, "Pasear al perro");
        assert_eq!(task.description(), None);
        assert_eq!(task.due_at(), None);
        assert_eq!(task.status(), Status::InProgress);
        assert!(output(&app).contains(&format!("Vencimiento: {NO_DATA}")));
    }

    #[test]
    fn test_edit_failure_keeps_task() {
        let script = "1\n1\n2\nE\nnueva\nZ\n\n\nN\n0\n0\n0\n0\n";
        let mut app = app(script, true);
        app.run().unwrap();
        let task = find(&app, "Pasear al perro");
        assert_eq!(task.description(), Some("Ejercitar 30 minutos"));
        assert!(output(&app).contains("Error: Estado inválido"));
    }

    #[test]
    fn test_search_finds_by_substring() {
        let mut app = app("2\nPERRO\n0\n0\n", true);
        app.run().unwrap();
        let out = output(&app);
        assert!(out.contains("Estas son las tareas relacionadas"));
        assert!(out.contains("Pasear al perro"));
    }

    #[test]
    fn test_search_without_results() {
        let mut app = app("2\ngato\n\n0\n", true);
        app.run().unwrap();
        assert!(output(&app).contains("No hay tareas relacionadas con la búsqueda."));
    }

    #[test]
    fn test_empty_search_can_go_back() {
        let mut app = app("2\n  \nS\n0\n", true);
        app.run().unwrap();
        assert!(output(&app).contains("Búsqueda vacía"));
    }
}
